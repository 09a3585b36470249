use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use zscaler_address_tool::AddressFeed;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Address Block Table
--------------------------------------------------------------------------------------*/

pub fn address_block_table(feed: &AddressFeed) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        ["Block", "IP Protocol", "Port", "Source", "Domains", "Date Added", "IPs"]
            .into_iter()
            .map(|header| {
                Cell::new(header)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Green)
            })
            .collect::<Vec<Cell>>(),
    );

    for (index, block) in feed.entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).add_attribute(Attribute::Bold),
            Cell::new(&block.ip_protocol),
            Cell::new(block.port),
            Cell::new(&block.source),
            Cell::new(&block.domains),
            Cell::new(&block.date_added),
            Cell::new(block.ips.len()),
        ]);
    }

    // Right-align the numeric columns
    for index in [0, 2, 6] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");

    // Print feed summary
    let (ipv4_count, ipv6_count) = feed.prefix_counts();

    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![Cell::new(&feed.cloud_name), Cell::new("Cloud Name")]);
    summary_table.add_row(vec![
        Cell::new(feed.entries.len()),
        Cell::new("Address Blocks"),
    ]);
    summary_table.add_row(vec![Cell::new(ipv4_count), Cell::new("IPv4 Prefixes")]);
    summary_table.add_row(vec![Cell::new(ipv6_count), Cell::new("IPv6 Prefixes")]);

    let summary_numbers_column = summary_table
        .column_mut(0)
        .expect("The first column exists");
    summary_numbers_column.set_cell_alignment(CellAlignment::Right);

    println!("{summary_table}");
}
