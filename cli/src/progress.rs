use std::{fmt::Display, sync::atomic};

/// A shared textual progress bar. `inc` from any worker, `print` from the
/// thread owning stdout.
pub struct Progress {
    current: atomic::AtomicUsize,
    done: atomic::AtomicBool,
    max: usize,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: atomic::AtomicUsize::new(0),
            done: atomic::AtomicBool::new(false),
            max,
        }
    }

    pub fn inc(&self) -> usize {
        self.current.fetch_add(1, atomic::Ordering::SeqCst)
    }

    fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }

    pub fn print(&self) {
        use std::io::Write;

        if self.done.load(atomic::Ordering::SeqCst) {
            return;
        }
        if self.get_raw() >= self.max {
            self.done.store(true, atomic::Ordering::SeqCst);
            println!("\r{}", self);
        } else {
            print!("\r{}", self);
        }
        let _ = std::io::stdout().flush();
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = 50;
        let val = self.get_raw() as f32 / self.max as f32;
        let width = ((n - 1) as f32 * val).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {val:.1}%",
            empty = "",
            width_left = width,
            width_right = n - width,
            val = 100. * val
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;

    #[test]
    fn counts_up() {
        let progress = Progress::new(3);
        assert_eq!(progress.inc(), 0);
        assert_eq!(progress.inc(), 1);
        assert_eq!(progress.get_raw(), 2);
    }

    #[test]
    fn formats_extremes() {
        let progress = Progress::new(10);
        assert!(format!("{progress}").contains("0.0%"));
        for _ in 0..10 {
            progress.inc();
        }
        assert!(format!("{progress}").contains("100.0%"));
    }
}
