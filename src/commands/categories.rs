use dsctl::category::Category;

pub struct Categories;

impl Categories {
    /// Print the usable datasource categories with their descriptions.
    #[allow(clippy::unnecessary_wraps)]
    pub fn execute() -> anyhow::Result<()> {
        println!("=== Datasource Categories ===\n");
        for category in Category::usable() {
            println!("{}", category.as_tag());
            println!("    {}\n", category.description());
        }
        Ok(())
    }
}
