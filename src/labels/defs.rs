use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelVersion {
    /// 13-class model (no smudge cells, no atypical lymphocytes).
    V13,
    /// 15-class model trained on the full leukocyte subclass panel.
    V15,
}

impl LabelVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelVersion::V13 => "v13",
            LabelVersion::V15 => "v15",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClassDef {
    pub code: &'static str,
    pub name: &'static str,
    pub precursor: bool,
}

const BAS: ClassDef = ClassDef {
    code: "BAS",
    name: "Basophil",
    precursor: false,
};
const EBO: ClassDef = ClassDef {
    code: "EBO",
    name: "Erythroblast",
    precursor: false,
};
const EOS: ClassDef = ClassDef {
    code: "EOS",
    name: "Eosinophil",
    precursor: false,
};
const KSC: ClassDef = ClassDef {
    code: "KSC",
    name: "Smudge cell",
    precursor: false,
};
const LYA: ClassDef = ClassDef {
    code: "LYA",
    name: "Lymphocyte (atypical)",
    precursor: false,
};
const LYT: ClassDef = ClassDef {
    code: "LYT",
    name: "Lymphocyte (typical)",
    precursor: false,
};
const MMZ: ClassDef = ClassDef {
    code: "MMZ",
    name: "Metamyelocyte",
    precursor: false,
};
const MOB: ClassDef = ClassDef {
    code: "MOB",
    name: "Monoblast",
    precursor: true,
};
const MON: ClassDef = ClassDef {
    code: "MON",
    name: "Monocyte",
    precursor: false,
};
const MYB: ClassDef = ClassDef {
    code: "MYB",
    name: "Myelocyte",
    precursor: false,
};
const MYO: ClassDef = ClassDef {
    code: "MYO",
    name: "Myeloblast",
    precursor: true,
};
const NGB: ClassDef = ClassDef {
    code: "NGB",
    name: "Neutrophil (band)",
    precursor: false,
};
const NGS: ClassDef = ClassDef {
    code: "NGS",
    name: "Neutrophil (segmented)",
    precursor: false,
};
const PMB: ClassDef = ClassDef {
    code: "PMB",
    name: "Promyelocyte (bilobed)",
    precursor: true,
};
const PMO: ClassDef = ClassDef {
    code: "PMO",
    name: "Promyelocyte",
    precursor: true,
};

// Index order is the model's output order; do not sort.
const CLASSES_V15: &[ClassDef] = &[
    BAS, EBO, EOS, KSC, LYA, LYT, MMZ, MOB, MON, MYB, MYO, NGB, NGS, PMB, PMO,
];

const CLASSES_V13: &[ClassDef] = &[
    BAS, EBO, EOS, LYT, MMZ, MOB, MON, MYB, MYO, NGB, NGS, PMB, PMO,
];

pub fn builtin_classes(version: LabelVersion) -> &'static [ClassDef] {
    match version {
        LabelVersion::V13 => CLASSES_V13,
        LabelVersion::V15 => CLASSES_V15,
    }
}
