//! In-page link routing
//!
//! One document-level click listener: clicks inside a link whose `href` is a
//! fragment (`#about`) scroll the target to the top of the viewport instead
//! of jumping. On narrow viewports the navigation menu is collapsed after
//! the scroll, since the menu covers the content there.

use folio_core::{Document, ElementId, ScrollOptions, Selector};
use tracing::{debug, trace};

use super::navigation::NavigationToggle;

/// What the router did with a click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// No link around the click target
    NotALink,
    /// A link, but not to a fragment; navigation proceeds normally
    External,
    /// Fragment link whose target does not exist
    Unresolved,
    Scrolled {
        target: ElementId,
        /// The navigation menu was open and got collapsed
        collapsed_nav: bool,
    },
}

impl RouteOutcome {
    /// Whether the host's default navigation must be cancelled
    pub fn prevents_default(self) -> bool {
        matches!(self, RouteOutcome::Unresolved | RouteOutcome::Scrolled { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SmoothScrollRouter {
    link: Selector,
    breakpoint: f32,
}

impl SmoothScrollRouter {
    pub fn new(link: Selector, breakpoint: f32) -> Self {
        Self { link, breakpoint }
    }

    /// Route a click on `target`
    ///
    /// `nav` is the only state outside this router it may touch, and only to
    /// collapse it.
    pub fn handle_click<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        target: ElementId,
        nav: Option<&mut NavigationToggle>,
    ) -> RouteOutcome {
        let Some(link) = doc.closest(target, &self.link) else {
            return RouteOutcome::NotALink;
        };
        let Some(fragment) = doc
            .attribute(link, "href")
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
        else {
            return RouteOutcome::External;
        };

        let destination = if fragment.is_empty() {
            None
        } else {
            doc.element_by_id(&fragment)
        };
        let Some(destination) = destination else {
            trace!(%fragment, "fragment does not resolve");
            return RouteOutcome::Unresolved;
        };

        doc.scroll_into_view(destination, ScrollOptions::smooth_to_start());

        let collapsed_nav = match nav {
            Some(nav) if doc.viewport_width() < self.breakpoint => nav.collapse(doc),
            _ => false,
        };
        debug!(%fragment, collapsed_nav, "scrolled to fragment");

        RouteOutcome::Scrolled {
            target: destination,
            collapsed_nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::navigation::NavState;
    use crate::config::SelectorConfig;
    use folio_core::{ElementSpec, MemoryDocument, ScrollBehavior, ScrollBlock};

    fn doc() -> MemoryDocument {
        MemoryDocument::from_specs(&[
            ElementSpec::new("nav")
                .child(ElementSpec::new("button").class("nav-toggle"))
                .child(
                    ElementSpec::new("ul").id("nav-list").child(
                        ElementSpec::new("a")
                            .attr("href", "#about")
                            .child(ElementSpec::new("span").text("About")),
                    ),
                )
                .child(ElementSpec::new("a").id("ghost").attr("href", "#missing-id"))
                .child(ElementSpec::new("a").id("away").attr("href", "https://example.com")),
            ElementSpec::new("section").id("about").offset_top(900.0),
        ])
    }

    fn router() -> SmoothScrollRouter {
        SmoothScrollRouter::new(Selector::tag("a"), 980.0)
    }

    #[test]
    fn test_scrolls_to_fragment() {
        let mut doc = doc();
        let span = doc.query(&Selector::tag("span")).unwrap();
        let about = doc.element_by_id("about").unwrap();

        let outcome = router().handle_click(&mut doc, span, None);

        assert_eq!(
            outcome,
            RouteOutcome::Scrolled {
                target: about,
                collapsed_nav: false
            }
        );
        assert!(outcome.prevents_default());
        assert_eq!(doc.scroll_top(), 900.0);
        let record = doc.scroll_log()[0];
        assert_eq!(record.options.behavior, ScrollBehavior::Smooth);
        assert_eq!(record.options.block, ScrollBlock::Start);
    }

    #[test]
    fn test_missing_fragment_changes_nothing() {
        let mut doc = doc();
        doc.set_viewport_width(600.0);
        let selectors = SelectorConfig::default().resolve().unwrap();
        let mut nav = NavigationToggle::mount(&mut doc, &selectors).unwrap();
        nav.toggle(&mut doc);
        let ghost = doc.element_by_id("ghost").unwrap();

        let outcome = router().handle_click(&mut doc, ghost, Some(&mut nav));

        assert_eq!(outcome, RouteOutcome::Unresolved);
        assert_eq!(doc.scroll_top(), 0.0);
        assert!(doc.scroll_log().is_empty());
        assert_eq!(nav.state(), NavState::Expanded);
    }

    #[test]
    fn test_collapses_nav_below_breakpoint() {
        let mut doc = doc();
        doc.set_viewport_width(600.0);
        let selectors = SelectorConfig::default().resolve().unwrap();
        let mut nav = NavigationToggle::mount(&mut doc, &selectors).unwrap();
        nav.toggle(&mut doc);
        let span = doc.query(&Selector::tag("span")).unwrap();

        let outcome = router().handle_click(&mut doc, span, Some(&mut nav));

        assert!(matches!(outcome, RouteOutcome::Scrolled { collapsed_nav: true, .. }));
        assert_eq!(nav.state(), NavState::Collapsed);
    }

    #[test]
    fn test_wide_viewport_keeps_nav() {
        let mut doc = doc();
        let selectors = SelectorConfig::default().resolve().unwrap();
        let mut nav = NavigationToggle::mount(&mut doc, &selectors).unwrap();
        nav.toggle(&mut doc);
        let span = doc.query(&Selector::tag("span")).unwrap();

        router().handle_click(&mut doc, span, Some(&mut nav));

        assert_eq!(nav.state(), NavState::Expanded);
    }

    #[test]
    fn test_non_fragment_and_non_link_clicks() {
        let mut doc = doc();
        let away = doc.element_by_id("away").unwrap();
        let about = doc.element_by_id("about").unwrap();

        let external = router().handle_click(&mut doc, away, None);
        assert_eq!(external, RouteOutcome::External);
        assert!(!external.prevents_default());

        assert_eq!(router().handle_click(&mut doc, about, None), RouteOutcome::NotALink);
    }
}
