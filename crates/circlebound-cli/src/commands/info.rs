use std::path::PathBuf;

use anyhow::Result;
use circlebound_core::io::ser::SerReader;
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input SER file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let reader = SerReader::open(&args.file)?;
    let header = &reader.header;

    println!("File:        {}", args.file.display());
    println!("Frames:      {}", reader.frame_count());
    println!("Dimensions:  {}x{}", header.width, header.height);
    println!("Bit depth:   {}", header.pixel_depth);
    println!("Color:       {:?}", header.color());
    println!("Delivered:   {}", header.message_encoding());

    for (label, value) in reader.descriptive_fields() {
        println!("{:<12} {}", format!("{label}:"), value);
    }

    let total_mb = header.data_byte_size().unwrap_or(0) as f64 / (1024.0 * 1024.0);
    println!("Data size:   {:.1} MB", total_mb);

    Ok(())
}
