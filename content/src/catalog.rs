//! Built-in storefront catalogue, used when no content document is configured.

use crate::source::ContentSource;
use crate::{ArrivalItem, BannerSlide, ContentError, CurtainType, EntryId, HeaderData, NavLink};

/// The default homepage content compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContentSource;

impl StaticContentSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn slide(id: &str, url: &str, tagline: &str, title: &str) -> BannerSlide {
    BannerSlide { id: EntryId::new(id), url: url.into(), tagline: tagline.into(), title: title.into() }
}

fn curtain(id: &str, name: &str, image: &str, href: &str) -> CurtainType {
    CurtainType { id: EntryId::new(id), name: name.into(), image: image.into(), href: href.into() }
}

fn arrival(id: &str, title: &str, description: &str, image: &str, href: &str) -> ArrivalItem {
    ArrivalItem {
        id: EntryId::new(id),
        title: title.into(),
        description: description.into(),
        image: image.into(),
        href: href.into(),
    }
}

impl ContentSource for StaticContentSource {
    fn header_data(&self) -> Result<HeaderData, ContentError> {
        Ok(HeaderData {
            logo: "/logo.png".into(),
            nav_links: vec![
                NavLink { text: "Curtains".into(), url: "/curtains".into() },
                NavLink { text: "About Us".into(), url: "/about".into() },
            ],
        })
    }

    fn banner(&self) -> Result<Vec<BannerSlide>, ContentError> {
        Ok(vec![
            slide(
                "new-collection",
                "https://images.pexels.com/photos/1350789/pexels-photo-1350789.jpeg",
                "Elegance in Every Fold",
                "Discover Our New Collection",
            ),
            slide(
                "light-filtering-sheers",
                "https://images.pexels.com/photos/3757942/pexels-photo-3757942.jpeg",
                "Perfect Ambiance",
                "Light Filtering Sheers",
            ),
            slide(
                "velvet-room-darkening",
                "https://cdn.ddecor.com/media/mageplaza/bannerslider/banner/image/s/a/sandscape.jpg",
                "Royal in Every Fold",
                "Velvet Room Darkening",
            ),
            slide(
                "illuminate-your-space",
                "https://cdn.ddecor.com/media/wysiwyg/bannerslider/desktop/4_RMC.jpg",
                "Illuminate Your Space with Elegance",
                "Illuminate Your Space with Elegance",
            ),
        ])
    }

    fn curtain_types(&self) -> Result<Vec<CurtainType>, ContentError> {
        Ok(vec![
            curtain(
                "sheers",
                "Sheer Curtains",
                "https://images.pexels.com/photos/1350789/pexels-photo-1350789.jpeg",
                "/Curtains/sheers",
            ),
            curtain(
                "blackout",
                "Blackout Curtains",
                "https://images.pexels.com/photos/3757942/pexels-photo-3757942.jpeg",
                "/Curtains/blackout",
            ),
            curtain(
                "roomdark",
                "Velvet Curtains",
                "https://images.pexels.com/photos/7195431/pexels-photo-7195431.jpeg",
                "/Curtains/roomdark",
            ),
            curtain(
                "thermalblackout",
                "Linen Curtains",
                "https://images.pexels.com/photos/4112558/pexels-photo-4112558.jpeg",
                "/Curtains/thermalblackout",
            ),
        ])
    }

    fn new_arrivals(&self) -> Result<Vec<ArrivalItem>, ContentError> {
        Ok(vec![
            arrival(
                "sheer",
                "Sheer Curtains",
                "Light, airy, and elegant",
                "https://images.pexels.com/photos/1350789/pexels-photo-1350789.jpeg",
                "/products/sheer",
            ),
            arrival(
                "blackout",
                "Blackout Curtains",
                "For privacy and peaceful sleep",
                "https://images.pexels.com/photos/3757942/pexels-photo-3757942.jpeg",
                "/products/blackout",
            ),
        ])
    }

    fn describe(&self) -> String {
        "built-in catalogue".to_owned()
    }
}
