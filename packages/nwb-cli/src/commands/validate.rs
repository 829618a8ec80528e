use std::path::Path;

use nwb_rs::load_metadata;
use serde::Serialize;

use crate::cli::ValidateArgs;
use crate::exit_codes;
use crate::output;

#[derive(Serialize)]
struct ValidateOutput {
    metafile: String,
    metadata_ok: bool,
    recording_dir: Option<String>,
    recording_dir_ok: Option<bool>,
    electrodes_file: Option<String>,
    electrodes_file_ok: Option<bool>,
    error: Option<String>,
}

pub fn execute(args: ValidateArgs) -> i32 {
    let mut error: Option<String> = None;

    let metadata_ok = match load_metadata(&args.metafile) {
        Ok(_) => true,
        Err(e) => {
            error = Some(e.to_string());
            false
        }
    };

    let recording_dir_ok = args.dir_ecephys_rhd.as_deref().map(|dir| {
        let ok = Path::new(dir).is_dir();
        if !ok && error.is_none() {
            error = Some(format!("Recording directory not found: {}", dir));
        }
        ok
    });

    let electrodes_file_ok = args.file_electrodes.as_deref().map(|file| {
        let ok = Path::new(file).is_file();
        if !ok && error.is_none() {
            error = Some(format!("Electrodes file not found: {}", file));
        }
        ok
    });

    let result = ValidateOutput {
        metafile: args.metafile.clone(),
        metadata_ok,
        recording_dir: args.dir_ecephys_rhd.clone(),
        recording_dir_ok,
        electrodes_file: args.file_electrodes.clone(),
        electrodes_file_ok,
        error: error.clone(),
    };

    if args.json {
        match output::to_json(&result) {
            Ok(json) => {
                if let Err(e) = output::write_output(&json) {
                    eprintln!("Error: {}", e);
                    return exit_codes::CONVERSION_ERROR;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return exit_codes::CONVERSION_ERROR;
            }
        }
    } else if let Some(ref err) = error {
        eprintln!("Error: {}", err);
    } else {
        println!("Inputs are valid ({})", args.metafile);
    }

    if error.is_some() {
        exit_codes::INPUT_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
