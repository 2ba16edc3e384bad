use std::path::Path;
use std::time::Duration;

use pokemon_catalog::{
    display, lookup_channel, sentinel_channel, BrowseSession, DebouncedInput, DetailView,
    FixtureSource, PaginationTrigger,
};

#[tokio::main]
async fn main() {
    let data_path = Path::new("data");

    // Load the bundled fixture catalog standing in for the remote service.
    let source = match FixtureSource::load(data_path) {
        Ok(source) => source,
        Err(e) => {
            println!("Error loading fixture data: {}", e);
            return;
        }
    };
    println!("Loaded {} fixture records", source.len());
    println!();

    // Example 1: incremental pagination driven by sentinel visibility.
    let mut session =
        BrowseSession::with_trigger(source.clone(), PaginationTrigger::with_increment(5));
    if let Err(e) = session.load_initial().await {
        println!("Error loading catalog: {}", e);
        return;
    }
    println!("First page ({} entries):", session.accumulator().len());
    print!("{}", display::format_catalog_listing(&session.visible_entries()));

    let (sentinel, mut observer) = sentinel_channel();
    while !session.accumulator().is_exhausted() {
        // The rendered sentinel would enter the viewport here.
        sentinel.mark_visible();
        if !observer.visible().await {
            break;
        }
        if let Err(e) = session.on_sentinel_visible().await {
            println!("Error loading catalog page: {}", e);
            return;
        }
        println!(
            "  ...scrolled: {} entries accumulated",
            session.accumulator().len()
        );
    }
    println!("Catalog exhausted at {} entries", session.accumulator().len());
    println!();

    // Example 2: a debounced search narrowing the catalog view.
    let (input, mut settled) = DebouncedInput::with_quiet_interval(Duration::from_millis(50));
    input.submit("c");
    input.submit("ch");
    input.submit("char");
    if let Some(term) = settled.recv().await {
        println!("Search settled on {:?}", term);
        session.set_query_term(term);
    }
    session.select_type("Fire");
    println!("Fire types matching the term:");
    print!("{}", display::format_catalog_listing(&session.visible_entries()));
    println!();

    // Example 3: detail lookup with the resolved evolution chain, handed
    // from the search role over the lookup channel.
    let (lookups, mut lookup_events) = lookup_channel();
    lookups.announce("charizard");
    lookups.announce("pikachu");
    lookups.announce("mew");
    drop(lookups);

    let mut view = DetailView::new(source);
    while let Some(name) = lookup_events.recv().await {
        let state = view.lookup(&name).await;
        println!("{}", display::format_detail_state(state));
        println!();
    }
}
