use serde::Serialize;

use super::Lens;

/// A fixed reference the lens wording is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceCitation {
    pub source: &'static str,
    pub how_used: &'static str,
}

static FOCUS: [SourceCitation; 4] = [
    SourceCitation {
        source: "Harvard Health Publishing (Harvard Medical School)",
        how_used: "Broad nutrition and brain-health framing; supports conservative language on diet patterns and energy.",
    },
    SourceCitation {
        source: "Mayo Clinic",
        how_used: "Broad nutrition and wellness framing; used for cautious, consumer-friendly explanations.",
    },
    SourceCitation {
        source: "WebMD",
        how_used: "General health reference for plain-language descriptions; not used for strong causal claims.",
    },
    SourceCitation {
        source: "Cleveland Clinic",
        how_used: "Broad clinical health guidance framing; supports cautious explanations about sugar, stimulants, and diet quality.",
    },
];

static REAL_FOOD: [SourceCitation; 4] = [
    SourceCitation {
        source: "NOVA food processing framework",
        how_used: "Defines ultra-processed markers (colors, flavors, emulsifiers, sweeteners, reconstituted ingredients).",
    },
    SourceCitation {
        source: "Health Canada – Lists of Permitted Food Additives",
        how_used: "Frames additives as regulated/permitted while still being processing markers.",
    },
    SourceCitation {
        source: "FDA – Food additives/GRAS overview",
        how_used: "Avoids unsafe claims; permitted additives can still indicate processing.",
    },
    SourceCitation {
        source: "EFSA – Food additives topic pages",
        how_used: "Reference for additive assessment framing; supports cautious language.",
    },
];

static PERSONAL: [SourceCitation; 4] = [
    SourceCitation {
        source: "Harvard Health Publishing (Harvard Medical School)",
        how_used: "Broad nutrition/brain-health framing; supports conservative wording.",
    },
    SourceCitation {
        source: "Mayo Clinic",
        how_used: "General nutrition/wellness framing; consumer-friendly explanations.",
    },
    SourceCitation {
        source: "WebMD",
        how_used: "Plain-language reference; avoid strong causal claims.",
    },
    SourceCitation {
        source: "Cleveland Clinic",
        how_used: "Broad clinical health framing; cautious explanations for sugars/stimulants/additives.",
    },
];

pub fn sources_for(lens: Lens) -> &'static [SourceCitation; 4] {
    match lens {
        Lens::Focus => &FOCUS,
        Lens::RealFood => &REAL_FOOD,
        Lens::Personal => &PERSONAL,
    }
}
