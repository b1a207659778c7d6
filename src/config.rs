//! Built-in workbook layout: header labels, sheet names and output files

use crate::extractor::Layout;

/// Column index at which header scanning gives up
pub const MAX_HEADER_COLUMN: u32 = 255;

/// Header row of every parameter sheet
pub const DEFAULT_START_ROW: u32 = 4;

/// Label column of every parameter sheet (column B)
pub const DEFAULT_START_COLUMN: u32 = 2;

/// Labels with special meaning in a header row
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLabels {
    /// A column carrying one of these ends the data columns
    pub stop: Vec<String>,
    /// Columns carrying one of these hold defaults, not an entry
    pub skip: Vec<String>,
    pub max_column: u32,
}

impl HeaderLabels {
    pub fn is_stop(&self, key: &str) -> bool {
        self.stop.iter().any(|l| l == key)
    }

    pub fn is_skip(&self, key: &str) -> bool {
        self.skip.iter().any(|l| l == key)
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self {
            stop: vec!["備考".to_string(), "Remarks".to_string()],
            skip: vec!["既定値".to_string(), "Default value".to_string()],
            max_column: MAX_HEADER_COLUMN,
        }
    }
}

/// Where one sheet lives in the workbook and how its columns are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetPlan {
    pub sheet: &'static str,
    pub layout: Layout,
}

impl SheetPlan {
    pub const fn new(sheet: &'static str, layout: Layout) -> Self {
        Self { sheet, layout }
    }
}

pub const LOGICAL_SWITCHES: SheetPlan =
    SheetPlan::new("Logical Switches", Layout::GroupedColumnsMergeAll);

pub const EDGE_DEPLOY: SheetPlan = SheetPlan::new("NSX Edge Deploy", Layout::Normal);
pub const EDGE_SETTINGS: SheetPlan = SheetPlan::new("NSX Edge Settings", Layout::Normal);
pub const EDGE_ROUTING: SheetPlan = SheetPlan::new("NSX Edge Routing", Layout::Normal);

pub const DLR_DEPLOY: SheetPlan = SheetPlan::new("DLR Deploy", Layout::Normal);
pub const DLR_SETTINGS: SheetPlan = SheetPlan::new("DLR Settings", Layout::GroupedColumns);
pub const DLR_ROUTING: SheetPlan = SheetPlan::new("DLR Routing", Layout::Normal);
// Sheet name as spelled in the workbook template
pub const DLR_BRIDGING: SheetPlan = SheetPlan::new("DLR Bridding", Layout::GroupedColumns);

pub const LS_OUTPUT: &str = "ls.json";
pub const ESG_OUTPUT: &str = "esg.json";
pub const DLR_OUTPUT: &str = "dlr.json";
