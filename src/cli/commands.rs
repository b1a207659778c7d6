use crate::config::{
    SheetPlan, DLR_BRIDGING, DLR_DEPLOY, DLR_OUTPUT, DLR_ROUTING, DLR_SETTINGS, EDGE_DEPLOY,
    EDGE_ROUTING, EDGE_SETTINGS, ESG_OUTPUT, LOGICAL_SWITCHES, LS_OUTPUT,
};
use crate::error::SheetResult;
use crate::excel::{Workbook, WorkbookImporter};
use crate::extractor::{extract, ExtractOptions, Layout};
use crate::mapper::{convert_edges, convert_logical_switches, convert_routers};
use crate::types::Tree;
use crate::writer::{to_json_string, write_json_file};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Documents written by one conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    pub switches: usize,
    pub edges: usize,
    pub routers: usize,
    pub files: Vec<PathBuf>,
}

/// Execute the convert command
pub fn convert(workbook: PathBuf, output_dir: PathBuf, verbose: bool) -> SheetResult<()> {
    println!("{}", "📄 Parameter sheet → JSON".bold().green());
    println!("   Workbook: {}", workbook.display());
    println!("   Output:   {}\n", output_dir.display());

    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }
    // The workbook file is closed again before anything is written
    let wb = WorkbookImporter::new(&workbook).import()?;

    if verbose {
        println!("   Sheets: {}\n", wb.sheet_names().collect::<Vec<_>>().join(", "));
    }

    let summary = convert_workbook(&wb, &output_dir)?;

    println!("{}", "✅ Conversion complete".bold().green());
    println!("   Logical switches: {}", summary.switches);
    println!("   Edges:            {}", summary.edges);
    println!("   Routers:          {}", summary.routers);
    for file in &summary.files {
        println!("   📝 {}", file.display().to_string().bright_blue());
    }
    println!();

    Ok(())
}

/// Extract every sheet the converters need and write the three documents
pub fn convert_workbook(wb: &Workbook, output_dir: &Path) -> SheetResult<ConvertSummary> {
    let switches = convert_logical_switches(&extract_sheet(wb, &LOGICAL_SWITCHES)?)?;

    let edges = convert_edges(
        &extract_sheet(wb, &EDGE_DEPLOY)?,
        &extract_sheet(wb, &EDGE_SETTINGS)?,
        &extract_sheet(wb, &EDGE_ROUTING)?,
    )?;

    let routers = convert_routers(
        &extract_sheet(wb, &DLR_DEPLOY)?,
        &extract_sheet(wb, &DLR_SETTINGS)?,
        &extract_sheet(wb, &DLR_ROUTING)?,
        &extract_sheet(wb, &DLR_BRIDGING)?,
    )?;

    fs::create_dir_all(output_dir)?;
    let mut files = Vec::new();
    for (name, docs) in [
        (LS_OUTPUT, &switches),
        (ESG_OUTPUT, &edges),
        (DLR_OUTPUT, &routers),
    ] {
        let path = output_dir.join(name);
        write_json_file(&path, docs)?;
        files.push(path);
    }

    Ok(ConvertSummary {
        switches: switches.len(),
        edges: edges.len(),
        routers: routers.len(),
        files,
    })
}

fn extract_sheet(wb: &Workbook, plan: &SheetPlan) -> SheetResult<Vec<Tree>> {
    let grid = wb.sheet(plan.sheet)?;
    let entries = extract(grid, &ExtractOptions::with_layout(plan.layout))?;
    debug!(sheet = plan.sheet, entries = entries.len(), "sheet extracted");
    Ok(entries)
}

/// Execute the dump command: print the raw extraction trees of one sheet
pub fn dump(workbook: PathBuf, sheet: String, layout: Layout) -> SheetResult<()> {
    let wb = WorkbookImporter::new(&workbook).import()?;
    let entries = extract(wb.sheet(&sheet)?, &ExtractOptions::with_layout(layout))?;
    println!("{}", to_json_string(&entries)?);
    Ok(())
}
