use roster_core::state::Theme;

use super::AppContext;

pub fn run(ctx: &AppContext, theme: Option<Theme>) {
    let dashboard = ctx.dashboard();
    if let Some(theme) = theme {
        dashboard.set_theme(theme);
    }
    println!("{}", dashboard.state().theme);
}
