//! Bundled image galleries
//!
//! Preset pickers shown by the admin editor: the full-resolution reference
//! is what gets stored, the thumbnail is only for picking.

/// One preset gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub full: &'static str,
    pub thumb: &'static str,
}

/// Hero (home page cover) presets
pub const HERO_GALLERY: [GalleryImage; 6] = [
    GalleryImage {
        full: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img0.png",
        thumb: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img0.png",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1450778869180-41d0601e046e?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1450778869180-41d0601e046e?auto=format&fit=crop&w=200&q=60",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?auto=format&fit=crop&w=200&q=60",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1534361960057-19889db9621e?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1534361960057-19889db9621e?auto=format&fit=crop&w=200&q=60",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1494947665470-20322015e3a8?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1494947665470-20322015e3a8?auto=format&fit=crop&w=200&q=60",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1558788353-f76d92427f16?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1558788353-f76d92427f16?auto=format&fit=crop&w=200&q=60",
    },
];

/// Service card presets
pub const SERVICE_GALLERY: [GalleryImage; 6] = [
    GalleryImage {
        full: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img11.png",
        thumb: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img11.png",
    },
    GalleryImage {
        full: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img12.png",
        thumb: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img12.png",
    },
    GalleryImage {
        full: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img13.png",
        thumb: "https://santanamendes.com.br/imagens/Site_Adestrador/Site_Adestrador_d0_img13.png",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1516734212186-a967f81ad0d7?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1516734212186-a967f81ad0d7?auto=format&fit=crop&w=200&q=60",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?auto=format&fit=crop&w=200&q=60",
    },
    GalleryImage {
        full: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?auto=format&fit=crop&w=1200&q=80",
        thumb: "https://images.unsplash.com/photo-1587300003388-59208cc962cb?auto=format&fit=crop&w=200&q=60",
    },
];
