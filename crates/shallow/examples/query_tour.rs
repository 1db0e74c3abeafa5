//! Walk through the query API on a small tree

use shallow::{Component, ComponentRegistry, Element, Query, RenderConfig, Renderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let badge = Component::new("Badge", |props, _| {
        let label = props
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or("?")
            .to_string();
        Element::host("span").prop("class", "badge").child(Element::text(label))
    });

    let inner = badge.clone();
    let card = Component::new("Card", move |props, children| {
        Element::host("div")
            .prop("class", "card")
            .child(Element::composite(&inner).prop(
                "label",
                props.get("title").cloned().unwrap_or_default(),
            ))
            .children(children.iter().cloned())
    });

    let mut registry = ComponentRegistry::new();
    registry.register(badge.clone());
    registry.register(card.clone());

    let config = RenderConfig::from_json(r#"{ "max_expansion_depth": 16 }"#)?;
    let renderer = Renderer::with_config(config).with_registry(registry);

    let wrapper = renderer.shallow(
        &Element::composite(&card)
            .prop("title", "New")
            .child(Element::host("p").prop("id", "body").child(Element::text("Hello"))),
    );

    println!("Shallow tree:\n{}\n", wrapper.debug()?);
    println!("Mounted: {:?}", wrapper.instance()?.map(|i| i.component().name().to_string()));
    println!("Badges (shallow): {}", wrapper.find("Badge").len());
    println!("Spans (shallow): {}", wrapper.find("span").len());

    let with_id = wrapper.find(Query::predicate(|w| w.prop("id").ok().flatten().is_some()));
    println!("Nodes with an id: {}", with_id.len());

    println!("Contains <p id=\"body\">Hello</p>: {}", wrapper.contains(
        &Element::host("p").prop("id", "body").child(Element::text("Hello")),
    ));

    let rendered = wrapper.render()?;
    println!("Spans (rendered): {}", rendered.find("span").len());
    println!("HTML: {}", wrapper.html()?);

    match wrapper.children()?.node_type() {
        Ok(t) => println!("Type: {:?}", t.map(|t| t.to_string())),
        Err(e) => println!("Expected failure: {}", e),
    }

    Ok(())
}
