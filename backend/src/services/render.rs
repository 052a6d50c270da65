//! HTML rendering of the storefront page.
//!
//! The renderer owns no logic beyond presentation: it walks a
//! [`LandingPage`] view model and writes markup. Every interpolated value goes
//! through `html_escape::encode_quoted_attribute`. Icons are inline glyphs and
//! card entrance transitions are a CSS animation.

use html_escape::encode_quoted_attribute;
use serde_json::json;

use crate::models::PriceTier;
use crate::routes::landing::LandingPage;
use crate::routes::posts::PostSummary;
use crate::routes::venues::VenueCard;

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:Inter,system-ui,sans-serif;background:#f9fafb;color:#111827}
a{color:inherit}
.wrap{max-width:72rem;margin:0 auto;padding:0 1rem}
header.site{position:sticky;top:0;z-index:30;background:rgba(255,255,255,.8);backdrop-filter:blur(8px);border-bottom:1px solid #e5e7eb}
header.site .wrap{display:flex;align-items:center;gap:1rem;padding-top:.75rem;padding-bottom:.75rem}
.logo{height:2.25rem;width:2.25rem;border-radius:.75rem}
.brand{flex:1}
.brand h1{margin:0;font-size:1.25rem}
.brand p{margin:0;font-size:.75rem;color:#6b7280}
.btn{display:inline-flex;align-items:center;gap:.5rem;border:1px solid #e5e7eb;border-radius:.75rem;padding:.5rem .75rem;font-size:.875rem;text-decoration:none}
.btn.dark{background:#000;color:#fff}
.hero{background:#fff}
.hero .wrap{display:grid;gap:1.5rem;grid-template-columns:2fr 1fr;padding-top:2.5rem;padding-bottom:2.5rem}
.search{margin-top:1.5rem;display:flex;gap:.75rem;align-items:center;border:1px solid #e5e7eb;border-radius:1rem;padding:.75rem}
.search input{width:100%;border:0;outline:none;font-size:1rem}
.filters{margin-top:1rem;display:grid;grid-template-columns:repeat(3,1fr);gap:.75rem}
.filters select,.budget{border:1px solid #e5e7eb;border-radius:.75rem;padding:.5rem}
.budget{display:flex;align-items:center;gap:.5rem}
.sponsor{border:1px solid #e5e7eb;border-radius:1rem;padding:1rem;background:#fff}
.sponsor .slot{margin-top:1rem;border-radius:.75rem;background:#f9fafb;padding:.75rem;font-size:.75rem;color:#6b7280}
.section-head{display:flex;justify-content:space-between;align-items:flex-end}
.grid{margin-top:1rem;display:grid;gap:1rem;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr))}
.card{overflow:hidden;border:1px solid #e5e7eb;border-radius:1rem;background:#fff;animation:enter .3s ease-out both}
.card img{width:100%;aspect-ratio:16/10;object-fit:cover;display:block}
.card .body{padding:1rem}
.card h4{margin:0}
.meta{margin-top:.25rem;font-size:.875rem;color:#4b5563}
.rating{color:#f59e0b;font-size:.875rem}
.tags{margin-top:.75rem;display:flex;flex-wrap:wrap;gap:.5rem}
.tag{border-radius:9999px;background:#f3f4f6;padding:.25rem .5rem;font-size:.75rem;color:#4b5563}
.posts{background:#fff;padding:2.5rem 0}
footer{border-top:1px solid #e5e7eb;background:#fff;font-size:.875rem;color:#4b5563}
footer .cols{display:grid;grid-template-columns:1fr 1fr;gap:1.5rem;padding:2rem 0}
@keyframes enter{from{opacity:0;transform:translateY(10px)}to{opacity:1;transform:none}}
"#;

/// Render the complete storefront document.
pub fn render_landing_page(page: &LandingPage) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{}</title>\n<meta name=\"description\" content=\"{}\">\n",
        encode_quoted_attribute(&page.brand.title),
        encode_quoted_attribute(&page.brand.description)
    ));
    html.push_str("<style>");
    html.push_str(STYLES);
    html.push_str("</style>\n");
    html.push_str(&render_json_ld(page));
    html.push_str("</head>\n<body>\n");

    render_header(&mut html, page);
    render_hero(&mut html, page);
    render_venues(&mut html, page);
    render_posts(&mut html, &page.posts);
    render_footer(&mut html, page);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, page: &LandingPage) {
    html.push_str(&format!(
        concat!(
            "<header class=\"site\"><div class=\"wrap\">",
            "<div class=\"logo\" style=\"background:{}\"></div>",
            "<div class=\"brand\"><h1>{}</h1><p>{}</p></div>",
            "<a class=\"btn\" href=\"#sponsor\">Sponsor a post</a>",
            "</div></header>\n"
        ),
        encode_quoted_attribute(&page.brand.primary_color),
        encode_quoted_attribute(&page.brand.name),
        encode_quoted_attribute(&page.brand.tagline)
    ));
}

fn render_select(html: &mut String, name: &str, all_label: &str, options: &[String], selected: &str) {
    html.push_str(&format!(
        "<select name=\"{}\" onchange=\"this.form.submit()\"><option value=\"\">{}</option>",
        name, all_label
    ));
    // A value from the URL that is not offered still has to show as active
    if !selected.is_empty() && !options.iter().any(|option| option == selected) {
        push_option(html, selected, true);
    }
    for option in options {
        push_option(html, option, option == selected);
    }
    html.push_str("</select>");
}

fn push_option(html: &mut String, value: &str, selected: bool) {
    let marker = if selected { " selected" } else { "" };
    html.push_str(&format!(
        "<option value=\"{0}\"{1}>{0}</option>",
        encode_quoted_attribute(value),
        marker
    ));
}

fn render_hero(html: &mut String, page: &LandingPage) {
    let filter = &page.filter;

    html.push_str("<section class=\"hero\"><div class=\"wrap\"><div>");
    html.push_str("<h2>Eat smarter in Singapore</h2>");
    html.push_str("<p>Search by area, cuisine, budget, or browse our latest listicles below.</p>");
    html.push_str("<form method=\"get\" action=\"/\" role=\"search\">");
    html.push_str(&format!(
        concat!(
            "<div class=\"search\"><span aria-hidden=\"true\">&#128269;</span>",
            "<input type=\"search\" name=\"q\" aria-label=\"Search venues\" ",
            "placeholder=\"Try &#39;ramen&#39; or &#39;late night&#39;\" value=\"{}\">",
            "</div>"
        ),
        encode_quoted_attribute(&filter.query)
    ));

    html.push_str("<div class=\"filters\">");
    render_select(html, "area", "All areas", &page.options.areas, &filter.area);
    render_select(
        html,
        "cuisine",
        "All cuisines",
        &page.options.cuisines,
        &filter.cuisine,
    );
    html.push_str(&format!(
        concat!(
            "<div class=\"budget\"><span aria-hidden=\"true\">&#9881;</span>",
            "<label for=\"max_price\">Max budget:</label>",
            "<input id=\"max_price\" type=\"range\" name=\"max_price\" min=\"{}\" max=\"{}\" value=\"{}\" ",
            "onchange=\"this.form.submit()\">",
            "<span>{}</span></div>"
        ),
        PriceTier::MIN,
        PriceTier::MAX,
        filter.max_price,
        encode_quoted_attribute(&filter.max_price.symbols())
    ));
    html.push_str("</div></form></div>");

    html.push_str(concat!(
        "<aside id=\"sponsor\"><div class=\"sponsor\">",
        "<p>SPONSORED</p><h3>Feature your restaurant</h3>",
        "<p>Reach hungry readers actively searching where to eat.</p>",
        "<a class=\"btn dark\" href=\"#sponsor\">Get listed</a>",
        "<div class=\"slot\">Ad slot (300&times;250).</div>",
        "</div></aside>"
    ));
    html.push_str("</div></section>\n");
}

fn render_venue_card(html: &mut String, card: &VenueCard) {
    html.push_str(&format!(
        concat!(
            "<article class=\"card\" data-venue=\"{}\">",
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            "<div class=\"body\">",
            "<h4>{}</h4><span class=\"rating\">&#9733; {}</span>",
            "<div class=\"meta\">&#128205; {} &middot; {} &middot; {}</div>",
            "<p>{}</p>"
        ),
        encode_quoted_attribute(card.id.as_str()),
        encode_quoted_attribute(&card.image),
        encode_quoted_attribute(&card.name),
        encode_quoted_attribute(&card.name),
        card.rating,
        encode_quoted_attribute(&card.area),
        encode_quoted_attribute(&card.cuisine),
        encode_quoted_attribute(&card.price_label),
        encode_quoted_attribute(&card.blurb)
    ));

    html.push_str("<div class=\"tags\">");
    for tag in &card.tags {
        html.push_str(&format!("<span class=\"tag\">#{}</span>", encode_quoted_attribute(tag)));
    }
    html.push_str("</div>");

    if let Some(booking) = &card.booking {
        html.push_str(&format!(
            "<a class=\"btn\" href=\"{}\" target=\"_blank\" rel=\"nofollow noopener\">{} &#8599;</a>",
            encode_quoted_attribute(&booking.href),
            encode_quoted_attribute(&booking.label)
        ));
    }
    html.push_str("</div></article>");
}

fn render_venues(html: &mut String, page: &LandingPage) {
    html.push_str("<section class=\"wrap\" id=\"picks\">");
    html.push_str(&format!(
        "<div class=\"section-head\"><h3>Curated picks</h3><p class=\"count\">{}</p></div>",
        encode_quoted_attribute(&page.result_label)
    ));
    html.push_str("<div class=\"grid\">");
    for card in &page.venues {
        render_venue_card(html, card);
    }
    html.push_str("</div></section>\n");
}

fn render_posts(html: &mut String, posts: &[PostSummary]) {
    html.push_str("<section class=\"posts\"><div class=\"wrap\"><h3>Latest listicles</h3><div class=\"grid\">");
    for post in posts {
        html.push_str(&format!(
            concat!(
                "<article class=\"card\">",
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                "<div class=\"body\"><h4>{}</h4><p>{}</p>",
                "<a href=\"{}\">Read the picks &rarr;</a>",
                "</div></article>"
            ),
            encode_quoted_attribute(&post.hero),
            encode_quoted_attribute(&post.title),
            encode_quoted_attribute(&post.title),
            encode_quoted_attribute(&post.summary),
            encode_quoted_attribute(&post.href)
        ));
    }
    html.push_str("</div></div></section>\n");
}

fn render_footer(html: &mut String, page: &LandingPage) {
    html.push_str(concat!(
        "<footer><div class=\"wrap cols\">",
        "<div><h4>Monetization</h4><ul>",
        "<li>Sponsored card slot for display ads.</li>",
        "<li>Affiliate tracking on Klook and Chope booking links.</li>",
        "<li>Use <code>rel=&quot;nofollow sponsored&quot;</code> on sponsored pages.</li>",
        "</ul></div>",
        "<div><h4>Roadmap</h4><ul>",
        "<li>Dynamic routing for /[slug] listicle pages.</li>",
        "<li>Content updates from a CMS.</li>",
        "<li>sitemap.xml, robots.txt and OpenGraph meta.</li>",
        "</ul></div></div>"
    ));
    html.push_str(&format!(
        "<div class=\"wrap\"><p>&copy; {} {}. Made with &hearts; in Singapore.</p></div></footer>\n",
        page.year,
        encode_quoted_attribute(&page.brand.name)
    ));
}

/// schema.org `ItemList` describing the venues on the page.
fn render_json_ld(page: &LandingPage) -> String {
    let items: Vec<serde_json::Value> = page
        .venues
        .iter()
        .enumerate()
        .map(|(i, card)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": {
                    "@type": "Restaurant",
                    "name": card.name,
                    "servesCuisine": card.cuisine,
                    "priceRange": card.price_label,
                    "image": card.image,
                    "address": { "@type": "PostalAddress", "addressLocality": card.area },
                },
            })
        })
        .collect();

    let document = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": page.brand.name,
        "numberOfItems": items.len(),
        "itemListElement": items,
    });

    // A literal "</" would close the script element early
    let body = document.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{}</script>\n", body)
}
