//! Departments Command
//!
//! List the departments an audit can cover.

use console::style;
use serde_json::json;

use crate::audit::{DepartmentId, agents::templates};
use crate::cli::ui::output::risk_style;
use crate::export::ExportFormat;
use crate::types::Result;

pub fn run(format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => {
            let rows: Vec<_> = DepartmentId::ALL
                .iter()
                .map(|&id| {
                    json!({
                        "id": id,
                        "name": id.display_name(),
                        "icon": id.preset().icon,
                        "riskLevel": id.risk_level(),
                        "agents": templates(id).iter().map(|t| t.name).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        ExportFormat::Text => {
            println!("{}", style("Departments").bold().underlined());
            for id in DepartmentId::ALL {
                println!(
                    "  {} {:<12} {:<22} risk {:<6} {} GPTs",
                    id.preset().icon,
                    style(id.as_str()).cyan(),
                    id.display_name(),
                    risk_style(id.risk_level()),
                    templates(id).len()
                );
            }
            println!();
            println!("Use ids with: webhunt audit --departments hr,sales,support ...");
        }
    }
    Ok(())
}
