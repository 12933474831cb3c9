mod bullet_points;
mod prompt;

pub use bullet_points::{BulletPointPrinter, LineWriter, StdoutLineWriter};
pub use prompt::prompt_secret;

#[cfg(test)]
pub(crate) use bullet_points::testutils::RecordingLineWriter;
