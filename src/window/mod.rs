//! Sliding window storage
//!
//! This module provides the bounded FIFO that holds the most recent samples.
//!
//! # Example
//!
//! ```
//! use framestats::window::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(1024);
//!
//! for fps in [60, 59, 61] {
//!     if window.is_full() {
//!         window.pop_front();
//!     }
//!     window.push_back(fps);
//! }
//!
//! assert_eq!(window.len(), 3);
//! assert_eq!(window.peek_front(), 60);
//! ```

mod deque;

pub use deque::SlidingWindow;
