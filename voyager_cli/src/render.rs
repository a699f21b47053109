use comfy_table::Table;
use voyager_itinerary::compose::session::ItineraryView;

pub fn day_table(view: &ItineraryView) -> Table {
    let mut table = Table::new();

    let mut header = vec!["Day"];
    if view.day_dates.is_some() {
        header.push("Date");
    }
    header.extend(["Stop", "Country", "Places", "Selected"]);
    table.set_header(header);

    for day in 0..view.itinerary.total_days() {
        let mut row = vec![(day + 1).to_string()];

        if let Some(dates) = &view.day_dates {
            row.push(dates[day].to_string());
        }

        let stop = view.day_stops.get(day);
        row.push(stop.map(|stop| stop.city().to_owned()).unwrap_or_default());
        row.push(
            stop.and_then(|stop| stop.country().map(str::to_owned))
                .unwrap_or_default(),
        );
        row.push(
            view.day_places[day]
                .iter()
                .map(|place| format!("{} [{}]", place.city(), place.line_key()))
                .collect::<Vec<_>>()
                .join(", "),
        );
        row.push(if view.selection.contains(day) {
            String::from("*")
        } else {
            String::new()
        });

        table.add_row(row);
    }

    table
}

pub fn span_table(view: &ItineraryView) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Span", "Days", "Origin", "Lane", "Connector"]);

    for (index, span) in view.layout.spans().iter().enumerate() {
        let connector = view
            .layout
            .connectors()
            .iter()
            .find(|connector| connector.after_span_index() == index)
            .map(|connector| format!("{} -> {}", connector.from_lane(), connector.to_lane()))
            .unwrap_or_default();

        table.add_row(vec![
            index.to_string(),
            format!("{} - {}", span.start_day() + 1, span.end_day() + 1),
            span.origin_tour_id().to_owned(),
            span.lane().to_string(),
            connector,
        ]);
    }

    table
}

pub fn price_table(view: &ItineraryView) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Per person"]);

    for line in view.quote.per_person_lines() {
        table.add_row(vec![line.label().to_owned(), format!("{:.2}", line.value())]);
    }
    table.add_row(vec![
        String::from("Total"),
        format!("{:.2}", view.quote.total()),
    ]);

    table
}
