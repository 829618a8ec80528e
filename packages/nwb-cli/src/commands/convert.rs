use std::path::Path;

use nwb_rs::{convert, load_metadata, ConvertOptions, NwbFileWriter, RhdIngest, SourcePaths};

use crate::cli::ConvertArgs;
use crate::exit_codes;
use crate::output;

pub fn execute(args: ConvertArgs) -> i32 {
    // Load metadata first: a missing or malformed metafile must fail
    // before any output file is created.
    let metadata = match load_metadata(&args.metafile) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let source_paths = SourcePaths::from_cli(
        args.dir_ecephys_rhd.as_deref(),
        args.file_electrodes.as_deref(),
    );
    let options = ConvertOptions {
        add_recording: args.add_rhd,
    };

    if !args.quiet {
        eprintln!("Converting session to {}...", args.output_file);
        if let Some(ref dir) = source_paths.recording_dir {
            eprintln!("  Recording directory: {}", dir.display());
        }
        if let Some(ref file) = source_paths.electrodes_file {
            eprintln!("  Electrodes file: {}", file.display());
        }
    }

    let adapter = RhdIngest::new();
    let writer = NwbFileWriter::new();

    match convert(
        &source_paths,
        Path::new(&args.output_file),
        &metadata,
        &options,
        &adapter,
        &writer,
    ) {
        Ok(report) => {
            if args.json {
                match output::to_json(&report) {
                    Ok(json) => {
                        if let Err(e) = output::write_output(&json) {
                            eprintln!("Error: {}", e);
                            return exit_codes::CONVERSION_ERROR;
                        }
                    }
                    Err(e) => {
                        eprintln!("Error serializing report: {}", e);
                        return exit_codes::CONVERSION_ERROR;
                    }
                }
            } else {
                println!("NWB file saved with size: {:.6} MB", report.size_mb());
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            exit_codes::CONVERSION_ERROR
        }
    }
}
