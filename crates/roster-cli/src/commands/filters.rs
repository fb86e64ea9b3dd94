use super::AppContext;
use super::render;

pub fn show(ctx: &AppContext) {
    render::print_filters(&ctx.dashboard().state().filter);
}

pub fn clear(ctx: &AppContext) {
    ctx.dashboard().clear_filters();
    render::print_filters(&ctx.dashboard().state().filter);
}
