use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use roster_cli::decode::{
    OptionOverrides, apply_overrides, decode_inputs, load_options, write_response,
};
use roster_cli::types::DecodeRun;
use roster_core::default_registry;

use crate::cli::DecodeArgs;
use crate::summary::apply_table_style;

pub fn run_sections() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Section", "Description"]);
    apply_table_style(&mut table);
    for decoder in default_registry().iter() {
        table.add_row(vec![decoder.section().as_str(), decoder.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<DecodeRun> {
    let span = info_span!("decode", inputs = args.inputs.len());
    let _guard = span.enter();

    let overrides = OptionOverrides {
        id_field: args.id_field.clone(),
        consume: args.consume,
        field_prefix: args.field_prefix.clone(),
        no_binary_prepass: args.no_binary_prepass,
    };
    let options = apply_overrides(load_options(args.config.as_deref())?, &overrides);

    let run = decode_inputs(&args.inputs, &options)?;
    write_response(&run.records, args.output.as_deref(), args.pretty)?;
    info!(
        files = run.files.len(),
        records = run.records.len(),
        "decode complete"
    );
    Ok(run)
}
