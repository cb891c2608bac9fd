use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum SupplierCmd {
    #[command(about = "Add a new supplier")]
    Add {
        #[arg(value_name = "NAME", help = "Supplier name")]
        name: String,
        #[arg(value_name = "CONTACT", help = "Free-text contact info")]
        contact_info: String,
    },
    #[command(about = "List all suppliers")]
    List,
    #[command(
        about = "Update supplier contact info",
        long_about = "Overwrite a supplier's contact info. The supplier is looked up by name; lowest id wins on duplicates."
    )]
    UpdateContact {
        #[arg(value_name = "NAME", help = "Supplier name")]
        supplier_name: String,
        #[arg(value_name = "CONTACT", help = "New contact info")]
        new_contact_info: String,
    },
    #[command(about = "Remove a supplier")]
    Remove {
        #[arg(value_name = "NAME", help = "Supplier name")]
        supplier_name: String,
    },
}
