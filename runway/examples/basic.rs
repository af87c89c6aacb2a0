// Example: drive the engine by hand and position one render pass.
use runway::{Engine, RunwayOptions};

fn main() {
    // 10k rows, every third one twice as tall.
    let rows: Vec<u32> = (0..10_000).map(|i| if i % 3 == 0 { 48 } else { 24 }).collect();

    let mut e = Engine::new(RunwayOptions::with_item_size_fn(|h: &u32| *h).with_runway(8, 2));
    e.set_items(&rows);
    e.set_container_size(600);
    println!("content_size={}", e.content_size());
    println!("initial range={:?}", e.flush());

    // A burst of scroll events within one frame produces a single range.
    for offset in [120, 480, 1_200, 4_000] {
        e.set_scroll_offset(offset);
    }
    println!("after scroll range={:?} anchor={:?}", e.flush(), e.anchor());

    let mut pass = e.begin_pass();
    for local in 0..pass.range().len() {
        if let Some(it) = e.place(&mut pass, local) {
            println!("  item {} at {} ({}px)", it.index, it.start, it.size);
        }
    }

    let off = e.scroll_to_index_offset(9_999);
    println!("scroll_to_index(9999) offset={off}");
}
