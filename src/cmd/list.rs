use crate::reports;
use crate::Context;
use clap::Args;
use gearforge::api::Session;
use gearforge::filter::{self, ItemFilter};
use gearforge::model::{Side, SlotCategory};
use gearforge::GfResult;
use std::fs;

/// Rows per page when listing items.
pub const PAGE_SIZE: usize = 50;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(short, long)]
    pub inventory: String,

    /// Only this side (default: both)
    #[arg(short, long, value_enum, ignore_case = true)]
    pub side: Option<Side>,

    /// Slot types to keep; repeat the flag for several (default: all)
    #[arg(long = "slot", value_enum, ignore_case = true)]
    pub slots: Vec<SlotCategory>,

    /// Keep items with an effect name containing this text
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

pub fn run(args: ListArgs, ctx: &Context) -> GfResult<()> {
    let content = fs::read_to_string(&args.inventory)?;
    let mut session = Session::new();
    session.load_inventory(&content, &ctx.catalog)?;
    reports::print_stats(&session.stats());

    let mut item_filter = ItemFilter {
        side: args.side,
        search: args.search.clone(),
        ..ItemFilter::default()
    };
    if !args.slots.is_empty() {
        item_filter.slots = args.slots.iter().copied().collect();
    }

    let filtered = session.filtered(&item_filter);
    let (rows, current, total_pages) = filter::page(&filtered, args.page, PAGE_SIZE);
    reports::print_items(rows, filtered.len(), current, total_pages);
    Ok(())
}
