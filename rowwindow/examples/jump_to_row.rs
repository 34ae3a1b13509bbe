// Example: jumping far ahead without measuring the rows in between.
use rowwindow::{Distance, RowProvider, WindowManager, WindowOptions};

struct Rows;

impl RowProvider for Rows {
    type Handle = usize;

    fn row_count(&self) -> usize {
        1_000_000
    }

    fn measure(&mut self, index: usize, _available_width: u32) -> u32 {
        20 + (index % 7) as u32 * 4
    }

    fn materialize(&mut self, index: usize) -> usize {
        index
    }

    fn recycle(&mut self, _index: usize, _handle: usize) {}
}

fn main() {
    let mut rows = Rows;
    let mut engine = WindowManager::new(WindowOptions::default());
    let r = engine.recompute(&mut rows, 0, 400);
    println!(
        "top: window={:?} average={} total={}",
        r.window,
        engine.average_height(),
        r.total_height
    );

    engine.lock_to(750_000);
    let r = engine.recompute(&mut rows, r.offset, 400);
    println!(
        "jump: window={:?} offset={} revealed={:?}",
        r.window, r.offset, r.revealed
    );
    if let Some(row) = engine.row(750_000) {
        let estimated = matches!(row.distance, Distance::Estimated(_));
        println!("row 750000: {:?} (estimated={estimated})", row.distance);
    }

    // Scrolling up from the jump target keeps the row on screen where it was.
    let r = engine.recompute(&mut rows, r.offset.saturating_sub(100), 400);
    println!("scroll up: phase={:?} offset={}", r.phase, r.offset);
    println!("state: {:?}", engine.state());
}
