/// How far below the top of the viewport a section has to reach before it
/// counts as the one being read.
pub const SCROLL_PROBE_OFFSET: f64 = 100.0;
/// Room left above a section when navigating to it, for the fixed header.
pub const NAV_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// The element id the section is rendered with.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Vertical extent of a rendered section, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.top + self.height
    }
}

/// Where the sections currently are on the page. `None` for a section that
/// isn't rendered.
pub trait SectionLayout {
    fn bounds(&self, section: Section) -> Option<Bounds>;
}

impl<F> SectionLayout for F
where
    F: Fn(Section) -> Option<Bounds>,
{
    fn bounds(&self, section: Section) -> Option<Bounds> {
        self(section)
    }
}

/// The first section, in page order, under the scroll probe.
pub fn section_at(layout: &impl SectionLayout, scroll_y: f64) -> Option<Section> {
    let probe = scroll_y + SCROLL_PROBE_OFFSET;
    Section::ALL
        .into_iter()
        .find(|s| layout.bounds(*s).is_some_and(|b| b.contains(probe)))
}

/// Instruction for the environment to smooth-scroll the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTo {
    pub top: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Section,
    menu_open: bool,
}

impl Navigation {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Re-derives the active section after a scroll. Keeps the current one when
    /// nothing is under the probe. Returns whether anything changed.
    pub fn on_scroll(&mut self, layout: &impl SectionLayout, scroll_y: f64) -> bool {
        match section_at(layout, scroll_y) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    /// Marks `section` active right away and closes the mobile menu, without
    /// waiting for the scroll to land.
    pub fn navigate_to(
        &mut self,
        layout: &impl SectionLayout,
        section: Section,
    ) -> Option<ScrollTo> {
        let bounds = layout.bounds(section)?;
        self.active = section;
        self.menu_open = false;
        Some(ScrollTo {
            top: bounds.top - NAV_OFFSET,
        })
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
