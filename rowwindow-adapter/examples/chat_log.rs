use rowwindow::{RowProvider, WindowOptions};
use rowwindow_adapter::Controller;

/// Messages whose height depends on the width they wrap at.
struct Messages {
    lengths: Vec<u32>,
}

impl RowProvider for Messages {
    type Handle = ();

    fn row_count(&self) -> usize {
        self.lengths.len()
    }

    fn measure(&mut self, index: usize, available_width: u32) -> u32 {
        let chars_per_line = (available_width / 8).max(1);
        let lines = self.lengths[index].div_ceil(chars_per_line).max(1);
        lines * 18 + 6
    }

    fn materialize(&mut self, _index: usize) {}

    fn recycle(&mut self, _index: usize, _handle: ()) {}
}

fn main() {
    // Example: a chat log that follows edits and reflows on resize.
    let lengths = (0..5_000).map(|i| 20 + (i * 37 % 300) as u32).collect();
    let mut c = Controller::new(Messages { lengths }, WindowOptions::default());

    let r = c.on_resize(640, 480);
    println!("layout: window={:?} total={}", r.window, r.total_height);

    let r = c.scroll_to_row(4_999);
    println!(
        "newest: offset={} max={} window={:?}",
        r.offset,
        c.max_scroll_offset(),
        r.window
    );

    c.provider_mut().lengths.push(120);
    let r = c.insert_rows(5_000, 1);
    println!("appended: phase={:?} window={:?}", r.phase, r.window);

    // A narrower container wraps every message onto more lines.
    let r = c.on_resize(320, 480);
    println!("reflowed: total={} state={:?}", r.total_height, c.frame_state());
}
