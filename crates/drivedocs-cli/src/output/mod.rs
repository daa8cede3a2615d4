mod table;

pub use table::print_files_table;

use colored::Colorize;

use drivedocs_core::OwnerView;
use drivedocs_models::ResolvedContext;

/// Print the context header: groups, driver, vehicle, trailers.
pub fn print_context(context: &ResolvedContext) {
    let trailers = context.trailer_names();
    println!("{}     {}", "Groups:".bold(), context.groups.join(", "));
    println!("{}     {}", "Driver:".bold(), context.driver);
    println!("{}    {}", "Vehicle:".bold(), context.vehicle_label());
    println!(
        "{} {}",
        "Trailer(s):".bold(),
        if trailers.is_empty() { "none".to_string() } else { trailers.join(", ") }
    );
}

/// Print a document's owners, one section per non-empty category.
pub fn print_owners(owners: &OwnerView) {
    if owners.is_empty() {
        return;
    }
    println!("{}", "Owners:".bold());
    if !owners.groups.is_empty() {
        println!("  Groups:   {}", owners.groups.join(", "));
    }
    if !owners.drivers.is_empty() {
        println!("  Drivers:  {}", owners.drivers.join(", "));
    }
    if !owners.vehicles.is_empty() {
        println!("  Vehicles: {}", owners.vehicles.join(", "));
    }
    if !owners.trailers.is_empty() {
        println!("  Trailers: {}", owners.trailers.join(", "));
    }
}
