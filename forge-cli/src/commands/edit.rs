//! Edit subcommand

use anyhow::{bail, Result};
use forge_remote::{EditRequest, TextEditService};
use std::path::Path;
use tracing::info;

use super::{read_source, write_output};

pub async fn edit_command(
    service: &dyn TextEditService,
    instruction: &str,
    input: Option<&Path>,
    output: Option<&Path>,
    write_in_place: bool,
) -> Result<()> {
    if write_in_place && input.is_none() {
        bail!("cannot rewrite in place when reading from stdin: pass --input or --output");
    }

    let source = read_source(input)?;
    let edited = service
        .edit(&EditRequest::new(source, instruction))
        .await?;

    let destination = match (output, write_in_place) {
        (Some(path), _) => Some(path),
        (None, true) => input,
        (None, false) => None,
    };

    match destination {
        Some(path) => {
            write_output(path, &edited)?;
            info!(path = %path.display(), "edited source written");
        }
        None => print!("{edited}"),
    }

    Ok(())
}
