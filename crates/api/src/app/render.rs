//! HTML for the home page and the product/location landing pages.
//!
//! Every dynamic value is escaped. The product's template name is carried
//! onto the page body so per-product styling can hook onto it.

use citypages_core::{Location, Product};
use citypages_sitemap::SiteUrls;
use quick_xml::escape::escape;

pub fn product_page(product: &Product, location: &Location) -> String {
    let title = format!("{} in {}", product.name, location.city);

    let mut html = head(&title, &product.description);
    html.push_str(&format!(
        "<body class=\"{template}\">\n<main>\n<h1>{title}</h1>\n",
        template = escape(product.template()),
        title = escape(title.as_str()),
    ));
    html.push_str(&format!(
        "<p class=\"location\">{city}, {region}{country}</p>\n",
        city = escape(location.city.as_str()),
        region = region(location),
        country = escape(location.country.as_str()),
    ));
    html.push_str(&format!("<p>{}</p>\n", escape(product.description.as_str())));

    if !product.features.is_empty() {
        html.push_str("<ul class=\"features\">\n");
        for feature in &product.features {
            html.push_str(&format!("<li>{}</li>\n", escape(feature.as_str())));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

pub fn home_page(products: &[Product], urls: &SiteUrls) -> String {
    let mut html = head("Products", "Packaging films delivered worldwide.");
    html.push_str("<body>\n<main>\n<h1>Products</h1>\n<ul class=\"products\">\n");
    for product in products {
        html.push_str(&format!(
            "<li><a href=\"{href}\">{name}</a>: {description}</li>\n",
            href = escape(urls.product_sitemap(&product.slug).as_str()),
            name = escape(product.name.as_str()),
            description = escape(product.description.as_str()),
        ));
    }
    html.push_str(&format!(
        "</ul>\n<p><a href=\"{}\">Sitemap</a></p>\n",
        escape(urls.sitemap_index().as_str())
    ));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn head(title: &str, description: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<meta name=\"description\" content=\"{}\">\n</head>\n",
        escape(title),
        escape(description),
    )
}

// "N/A" states are left out of the visible address.
fn region(location: &Location) -> String {
    if location.state.is_empty() || location.state == "N/A" {
        String::new()
    } else {
        format!("{}, ", escape(location.state.as_str()))
    }
}
