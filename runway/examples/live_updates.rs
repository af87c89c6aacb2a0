// Example: observe published changes while the data source updates sizes.
use runway::{Change, Engine, RunwayOptions};

struct Message {
    lines: u32,
}

fn main() {
    let options = RunwayOptions::with_item_size_fn(|m: &Message| 16 + m.lines * 20)
        .with_on_change(Some(|c: Change| println!("change: {c:?}")));
    let mut e = Engine::new(options);

    let mut messages: Vec<Message> = (0..200).map(|i| Message { lines: 1 + i % 4 }).collect();
    e.set_items(&messages);
    e.set_container_size(400);
    e.flush();

    e.set_scroll_offset(2_000);
    e.flush();

    // Far below the rendered items: only the content size is published.
    messages[150].lines = 12;
    let sync = e.set_items(&messages);
    println!("edit below: must_recalculate={}", sync.must_recalculate);
    println!("flush: {:?}", e.flush());

    // Inside the rendered items: the range is recalculated.
    let index = e.render_range().start;
    messages[index].lines = 12;
    let sync = e.set_items(&messages);
    println!("edit inside: must_recalculate={}", sync.must_recalculate);
    println!("flush: {:?}", e.flush());

    messages.truncate(10);
    e.set_items(&messages);
    println!("after truncate: {:?}", e.flush());
}
