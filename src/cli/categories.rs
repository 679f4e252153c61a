//! Category listing
//!
//! Shows the loaded taxonomy numbered the same way as the `add` menus.

use crate::config::Taxonomy;
use crate::error::LedgerResult;

/// Format the taxonomy as a numbered tree
pub fn format_category_tree(taxonomy: &Taxonomy) -> String {
    let mut output = String::new();

    for (i, category) in taxonomy.categories().iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, category.name));
        for (j, sub) in category.subcategories.iter().enumerate() {
            output.push_str(&format!("   {}. {}\n", j + 1, sub));
        }
    }

    output
}

/// Handle the categories command
pub fn handle_categories_command(taxonomy: &Taxonomy) -> LedgerResult<()> {
    print!("{}", format_category_tree(taxonomy));
    Ok(())
}
