use crate::config::MarkupConfig;
use crate::domain::model::{Extraction, ItemFault, ItemOutcome, ItemRecord, MissingPart};
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Builds the document tree. html5ever recovers from malformed markup, so
/// this never fails; a broken page just yields fewer matches later.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::SelectorError {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Compiled selectors for one page layout.
pub struct Extractor {
    container: Selector,
    heading: Selector,
    link: Selector,
    price: Selector,
    page_title: Selector,
}

impl Extractor {
    pub fn new(markup: &MarkupConfig) -> Result<Self> {
        let container = format!("{}.{}", markup.container_tag, markup.container_class);
        let price = format!("p.{}", markup.price_class);
        tracing::debug!(
            "Container selector '{}', heading '{}', price '{}'",
            container,
            markup.heading_tag,
            price
        );

        Ok(Self {
            container: compile(&container)?,
            heading: compile(&markup.heading_tag)?,
            link: compile("a")?,
            price: compile(&price)?,
            page_title: compile("title")?,
        })
    }

    pub fn extract(&self, html: &str) -> Extraction {
        let document = parse_document(html);
        self.extract_document(&document)
    }

    pub fn extract_document(&self, document: &Html) -> Extraction {
        let page_title = self.page_title(document);
        let items = document
            .select(&self.container)
            .enumerate()
            .map(|(index, container)| self.extract_item(index, container))
            .collect();

        Extraction { page_title, items }
    }

    pub fn page_title(&self, document: &Html) -> Option<String> {
        let title = document
            .select(&self.page_title)
            .next()?
            .text()
            .collect::<String>();
        let title = title.trim();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    }

    fn extract_item(&self, index: usize, container: ElementRef<'_>) -> ItemOutcome {
        let fault = |missing| ItemFault { index, missing };

        // The link text is often truncated; the title attribute carries the full name.
        let heading = container
            .select(&self.heading)
            .next()
            .ok_or_else(|| fault(MissingPart::Heading))?;
        let link = heading
            .select(&self.link)
            .next()
            .ok_or_else(|| fault(MissingPart::Link))?;
        let title = link
            .value()
            .attr("title")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| fault(MissingPart::TitleAttribute))?;

        let price = container
            .select(&self.price)
            .next()
            .ok_or_else(|| fault(MissingPart::PriceParagraph))?
            .text()
            .collect::<String>();
        if price.trim().is_empty() {
            return Err(fault(MissingPart::PriceText));
        }

        Ok(ItemRecord::new(title, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> Extractor {
        Extractor::new(&MarkupConfig::default()).unwrap()
    }

    fn pod(title: &str, price: &str) -> String {
        format!(
            r#"<article class="product_pod">
  <h3><a href="catalogue/x.html" title="{title}">{short}...</a></h3>
  <div class="product_price"><p class="price_color">{price}</p></div>
</article>"#,
            title = title,
            short = &title[..title.len().min(8)],
            price = price,
        )
    }

    fn page(body: &str) -> String {
        format!(
            "<!DOCTYPE html><html><head><title>\n  All products | Books to Scrape\n</title></head><body>{}</body></html>",
            body
        )
    }

    #[test]
    fn test_single_container_scenario() {
        let html = page(&pod("Example Book", "£19.99"));
        let extraction = extractor().extract(&html);

        assert_eq!(extraction.matched(), 1);
        assert_eq!(
            extraction.items[0],
            Ok(ItemRecord::new("Example Book", "£19.99"))
        );
    }

    #[test]
    fn test_records_follow_document_order() {
        let body: String = (1..=7)
            .map(|i| pod(&format!("Book number {}", i), &format!("£{}.00", i)))
            .collect();
        let extraction = extractor().extract(&page(&body));

        assert_eq!(extraction.matched(), 7);
        for (i, item) in extraction.items.iter().enumerate() {
            let record = item.as_ref().unwrap();
            assert_eq!(record.title, format!("Book number {}", i + 1));
            assert_eq!(record.price, format!("£{}.00", i + 1));
        }
    }

    #[test]
    fn test_title_comes_from_attribute_not_link_text() {
        let html = page(
            r#"<article class="product_pod"><h3><a title="A Light in the Attic">A Light in the ...</a></h3>
               <p class="price_color">£51.77</p></article>"#,
        );
        let extraction = extractor().extract(&html);
        assert_eq!(
            extraction.items[0].as_ref().unwrap().title,
            "A Light in the Attic"
        );
    }

    #[test]
    fn test_price_text_is_verbatim() {
        let html = page(
            r#"<article class="product_pod"><h3><a title="Spaced">x</a></h3>
               <p class="price_color"> &pound;1,299.00 <span>GBP</span></p></article>"#,
        );
        let extraction = extractor().extract(&html);
        assert_eq!(
            extraction.items[0].as_ref().unwrap().price,
            " £1,299.00 GBP"
        );
    }

    #[test]
    fn test_container_class_matches_as_token() {
        let html = page(
            r#"<article class="featured product_pod wide"><h3><a title="Tokenised">t</a></h3>
               <p class="price_color big">£3.00</p></article>
               <article class="product_pod_extra"><h3><a title="Not me">n</a></h3>
               <p class="price_color">£4.00</p></article>
               <div class="product_pod"><h3><a title="Wrong tag">w</a></h3>
               <p class="price_color">£5.00</p></div>"#,
        );
        let extraction = extractor().extract(&html);

        assert_eq!(extraction.matched(), 1);
        assert_eq!(extraction.items[0].as_ref().unwrap().title, "Tokenised");
    }

    #[test]
    fn test_first_matching_price_paragraph_wins() {
        let html = page(
            r#"<article class="product_pod"><h3><a title="Two prices">t</a></h3>
               <p class="instock">In stock</p>
               <p class="price_color">£10.00</p>
               <p class="price_color">£99.00</p></article>"#,
        );
        let extraction = extractor().extract(&html);
        assert_eq!(extraction.items[0].as_ref().unwrap().price, "£10.00");
    }

    #[test]
    fn test_missing_parts_reported_per_item() {
        let html = page(&format!(
            "{}{}{}{}{}{}",
            pod("Fine", "£1.00"),
            r#"<article class="product_pod"><p class="price_color">£2.00</p></article>"#,
            r#"<article class="product_pod"><h3>No link</h3><p class="price_color">£3.00</p></article>"#,
            r#"<article class="product_pod"><h3><a href="x">untitled</a></h3><p class="price_color">£4.00</p></article>"#,
            r#"<article class="product_pod"><h3><a title="No price">n</a></h3></article>"#,
            r#"<article class="product_pod"><h3><a title="Blank price">b</a></h3><p class="price_color">  </p></article>"#,
        ));
        let extraction = extractor().extract(&html);

        let missing: Vec<Option<MissingPart>> = extraction
            .items
            .iter()
            .map(|item| item.as_ref().err().map(|f| f.missing))
            .collect();
        assert_eq!(
            missing,
            vec![
                None,
                Some(MissingPart::Heading),
                Some(MissingPart::Link),
                Some(MissingPart::TitleAttribute),
                Some(MissingPart::PriceParagraph),
                Some(MissingPart::PriceText),
            ]
        );
        assert_eq!(extraction.items[3].as_ref().unwrap_err().index, 3);
    }

    #[test]
    fn test_no_containers_yields_empty_extraction() {
        let extraction = extractor().extract(&page("<p>Nothing for sale</p>"));
        assert_eq!(extraction.matched(), 0);
        assert_eq!(
            extraction.page_title.as_deref(),
            Some("All products | Books to Scrape")
        );
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        // No <html>/<head>, unclosed paragraphs and articles.
        let html = concat!(
            "<article class=\"product_pod\"><h3><a title=\"First\">f</a></h3><p class=\"price_color\">£7.50\n",
            "<article class=\"product_pod\"><h3><a title=\"Second\">s</a></h3><p class=\"price_color\">£8.50\n",
        );
        let extraction = extractor().extract(html);

        assert!(extraction.page_title.is_none());
        assert_eq!(
            extraction.items,
            vec![
                Ok(ItemRecord::new("First", "£7.50\n")),
                Ok(ItemRecord::new("Second", "£8.50\n")),
            ]
        );
    }

    #[test]
    fn test_custom_markup() {
        let markup = MarkupConfig {
            container_tag: "li".to_string(),
            container_class: "listing".to_string(),
            heading_tag: "h2".to_string(),
            price_class: "amount".to_string(),
        };
        let html = page(
            r#"<ul><li class="listing"><h2><a title="Lamp">L</a></h2><p class="amount">$12</p></li></ul>"#,
        );
        let extraction = Extractor::new(&markup).unwrap().extract(&html);
        assert_eq!(extraction.items, vec![Ok(ItemRecord::new("Lamp", "$12"))]);
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let markup = MarkupConfig {
            heading_tag: "h3[".to_string(),
            ..MarkupConfig::default()
        };
        assert!(matches!(
            Extractor::new(&markup),
            Err(ScrapeError::SelectorError { .. })
        ));
    }
}
