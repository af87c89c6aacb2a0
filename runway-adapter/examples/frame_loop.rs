use runway::RunwayOptions;
use runway_adapter::{Controller, ScrollBehavior, ViewRepeater, Viewport};

// A scroll container that jumps instantly to requested offsets.
struct Container {
    offset: u64,
}

impl Viewport for Container {
    fn scroll_offset(&self) -> u64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: u64, _behavior: ScrollBehavior) {
        self.offset = offset;
    }
}

// Prints where each mounted row ends up.
struct Rows;

impl ViewRepeater<String> for Rows {
    type Element = usize;

    fn position_element(&mut self, element: &usize, offset: i64) {
        println!("  view #{element} -> translateY({offset}px)");
    }

    fn view_rendered(&mut self, index: usize, _element: &usize, item: &String) {
        println!("  rendered [{index}] {item}");
    }
}

fn main() {
    // Example: the host's frame loop around a Controller.
    //
    // An adapter would:
    // - forward data snapshots, resizes, and raw scroll events as they arrive
    // - call tick() once per animation frame
    // - mount one view per item of the returned range and report each mount
    let items: Vec<String> = (0..1_000).map(|i| format!("row {i}")).collect();
    let options = RunwayOptions::with_item_size_fn(|s: &String| 20 + (s.len() as u32 % 3) * 10)
        .with_runway(4, 1);

    let mut c = Controller::new(options);
    c.attach(Container { offset: 0 }, Rows);
    c.on_data(Some(items.as_slice()));
    c.on_container_resize(120);

    let render = |c: &mut Controller<String, Container, Rows>| {
        let Some(range) = c.tick() else {
            println!("frame: nothing to do");
            return;
        };
        println!("frame: range={range:?}");
        c.on_rendering_start();
        for (local, index) in (range.start..range.end).enumerate() {
            c.on_view_rendered(&local, local, &items[index]);
        }
    };

    render(&mut c);

    c.scroll_to_index(500, ScrollBehavior::Smooth);
    c.on_scroll_event();
    render(&mut c);

    // Nothing changed since the last frame.
    render(&mut c);

    if let Some((container, _rows)) = c.detach() {
        println!("detached at offset {}", container.offset);
    }
}
