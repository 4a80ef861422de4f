mod announcement;
mod message;

pub use announcement::Announcement;
