//! One-time migration of a JSON document into the Supabase tables.

use wp_core::entities::{QuickLink, TravelData};
use wp_core::responses::SeedReport;

use crate::client::SupabaseClient;
use crate::rows::{PlaceRow, QuickLinkRow};

/// Which table a seeded row went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTable {
    Places,
    QuickLinks,
}

/// Result of inserting one row, reported to the progress callback.
#[derive(Debug, Clone, Copy)]
pub struct SeedStep<'a> {
    pub table: SeedTable,
    pub name: &'a str,
    pub ok: bool,
}

/// Rows [`seed`] will attempt: every place, then every quick link.
#[must_use]
pub fn seed_row_count(data: &TravelData) -> usize {
    data.place_count() + data.quick_link_count()
}

/// Insert every place and quick link of `data`.
///
/// Places go first, city by city. Quick links get the spaced sort order
/// from [`QuickLink::sort_order_for`]. A failed row is logged and counted
/// and the run carries on.
pub async fn seed(client: &SupabaseClient, data: &TravelData) -> SeedReport {
    seed_with_progress(client, data, |_| {}).await
}

/// [`seed`], calling `on_step` after each row.
pub async fn seed_with_progress<F>(
    client: &SupabaseClient,
    data: &TravelData,
    mut on_step: F,
) -> SeedReport
where
    F: FnMut(SeedStep<'_>),
{
    let mut report = SeedReport::default();

    for (city_key, city) in &data.cities {
        tracing::info!(city = %city.name, key = %city_key, places = city.places.len(), "seeding city");
        for place in &city.places {
            let row = PlaceRow::from_place(city_key, place);
            let ok = match client.insert_place(&row).await {
                Ok(_) => {
                    report.places += 1;
                    true
                }
                Err(e) => {
                    tracing::error!(place = %place.name, error = %e, "place insert failed");
                    report.failures += 1;
                    false
                }
            };
            on_step(SeedStep {
                table: SeedTable::Places,
                name: &place.name,
                ok,
            });
        }
    }

    for (ci, group) in data.quick_links.iter().enumerate() {
        tracing::info!(category = %group.category, links = group.links.len(), "seeding quick links");
        for (li, link) in group.links.iter().enumerate() {
            let row = QuickLinkRow::new(
                group.category.clone(),
                link.name.clone(),
                link.url.clone(),
                QuickLink::sort_order_for(ci, li),
            );
            let ok = match client.insert_quick_link(&row).await {
                Ok(_) => {
                    report.quick_links += 1;
                    true
                }
                Err(e) => {
                    tracing::error!(link = %link.name, error = %e, "quick link insert failed");
                    report.failures += 1;
                    false
                }
            };
            on_step(SeedStep {
                table: SeedTable::QuickLinks,
                name: &link.name,
                ok,
            });
        }
    }

    tracing::info!(
        places = report.places,
        quick_links = report.quick_links,
        failures = report.failures,
        "seed finished"
    );
    report
}
