/// Where portal positions come from, shown alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

impl Source {
    pub const fn dofus_portals() -> Source {
        Source {
            name: "dofus-portals.fr",
            icon: "https://i.imgur.com/j8p3M2D.png",
            url: "https://dofus-portals.fr",
        }
    }
}
