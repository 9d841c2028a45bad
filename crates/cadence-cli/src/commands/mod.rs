pub mod calendar;
pub mod check;
pub mod describe;
pub mod next;
pub mod preview;
