//! Summary CLI command

use crate::display::format_summary;
use crate::models::{CategoryId, Dataset};
use crate::services::SummaryService;

/// Handle `summary`
pub fn handle_summary(dataset: &Dataset, month: Option<u32>, category: Option<u64>) {
    let category_id = category.map(CategoryId::new);
    let service = SummaryService::new(dataset);

    match service.total(month, category_id) {
        Ok(total) => {
            let category_name = category_id
                .and_then(|id| dataset.category(id))
                .map(|c| c.name.as_str());
            println!("{}", format_summary(total, month, category_name));
        }
        Err(e) => eprintln!("Error computing summary: {}", e),
    }
}
