// Example: first layout, scrolling, and the rows the engine measured along the way.
use rowwindow::{RowProvider, WindowManager, WindowOptions};

struct Lines {
    heights: Vec<u32>,
    measured: usize,
}

impl RowProvider for Lines {
    type Handle = String;

    fn row_count(&self) -> usize {
        self.heights.len()
    }

    fn measure(&mut self, index: usize, _available_width: u32) -> u32 {
        self.measured += 1;
        self.heights[index]
    }

    fn materialize(&mut self, index: usize) -> String {
        format!("line {index}")
    }

    fn recycle(&mut self, _index: usize, _handle: String) {}
}

fn main() {
    // Rows alternate between one and three text lines.
    let heights = (0..100_000).map(|i| if i % 3 == 0 { 48 } else { 16 }).collect();
    let mut rows = Lines {
        heights,
        measured: 0,
    };
    let mut engine = WindowManager::new(WindowOptions::default());

    let r = engine.recompute(&mut rows, 0, 600);
    println!(
        "first layout: window={:?} total={} measured={}",
        r.window, r.total_height, rows.measured
    );

    let mut offset = r.offset;
    for _ in 0..20 {
        offset += 300;
        let r = engine.recompute(&mut rows, offset, 600);
        offset = r.offset;
    }
    println!(
        "after scrolling: offset={offset} window={:?} next_precise_at={} measured={}",
        engine.window(),
        engine.next_precise_at(),
        rows.measured
    );
}
