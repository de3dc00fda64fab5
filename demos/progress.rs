//! Live progress demo: two workers, each owning a pair of lines.
//!
//! Run with `cargo run --example progress` in a real terminal.

use std::thread;
use std::time::Duration;

use lineflow::{style, LineWriter, Style};

fn main() -> lineflow::Result<()> {
    let names = ["cat", "dog"];
    let writer = LineWriter::new(names.len() * 2)?;
    writer.set_flush_interval(Duration::from_millis(100))?;

    thread::scope(|scope| {
        for (slot, name) in names.iter().enumerate() {
            let writer = &writer;
            scope.spawn(move || {
                let base = slot * 2;
                let pace = Duration::from_millis(50 + 50 * slot as u64);
                for i in 0..100 {
                    let header = style(
                        &[Style::Green, Style::Bold],
                        &format!("{name}, step {i}"),
                    );
                    let _ = writer.write_line(base, &header);
                    let _ = writer.write_line(base + 1, &format!("{name}...{}/100", i + 1));
                    thread::sleep(pace);
                }
                let _ = writer.write_line(base, &format!("{name} done"));
            });
        }
    });

    writer.write_last_line("dog 100%")?;
    writer.write_new_line("all done")?;
    writer.close()
}
