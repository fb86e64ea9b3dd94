use anyhow::Result;
use clap::Args;
use colored::Colorize;

use roster_core::employee::NewEmployeeRequest;

use super::AppContext;
use super::render;

/// Add-employee form fields. Blank values are reported by validation,
/// not by the argument parser.
#[derive(Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long, default_value = "")]
    department: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long)]
    bio: Option<String>,
    #[arg(long)]
    json: bool,
}

impl From<AddArgs> for NewEmployeeRequest {
    fn from(args: AddArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            age: args.age,
            department: args.department,
            phone: args.phone,
            address: args.address,
            city: args.city,
            state: args.state,
            bio: args.bio,
        }
    }
}

pub async fn run(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let json = args.json;
    let request = NewEmployeeRequest::from(args);

    // Reject bad input before touching the network
    if let Err(errors) = request.validate() {
        render::print_validation_errors(&errors);
        anyhow::bail!("Employee was not added");
    }

    ctx.load_roster().await?;
    let employee = ctx.dashboard().add_employee(&request)?;

    if json {
        return render::print_json(&employee);
    }
    println!(
        "{} {} (id {})",
        "Added".green().bold(),
        employee.full_name(),
        employee.id
    );
    render::print_profile(&employee, false);
    println!(
        "{}",
        "Added employees live for this session only; the roster is re-fetched each run."
            .dimmed()
    );
    Ok(())
}
