const INDENT: &str = "  ";
const BULLET: &str = "•";

/// Prints `• item` lines, indenting each nested level by two spaces.
pub struct BulletPointPrinter<W: LineWriter + Clone> {
    writer: W,
    prefix: String,
}

impl<W: LineWriter + Clone> BulletPointPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            prefix: String::new(),
        }
    }

    pub fn print_item(&self, message: impl std::fmt::Display) {
        self.writer
            .write_line(&format!("{}{BULLET} {message}", self.prefix));
    }

    pub fn indent(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            prefix: format!("{}{INDENT}", self.prefix),
        }
    }
}

impl BulletPointPrinter<StdoutLineWriter> {
    pub fn new_stdout() -> Self {
        Self::new(StdoutLineWriter)
    }
}

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;

impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
