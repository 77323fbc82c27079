use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// `-` stands for stdin / stdout.
fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Open `path` for reading; `-` reads stdin.
pub fn open_reader(path: &str) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(&Some(path.to_string())) {
        None => Box::new(BufReader::new(std::io::stdin().lock())),
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
    })
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, short = 'o', default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        open_writer(&self.output)
    }
}

/// Open a writer for `path`; `None` or `-` writes stdout.
pub fn open_writer(path: &Option<String>) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(path) {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}
