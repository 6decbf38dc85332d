//! Built-in English inflection and transliteration tables.
//!
//! Order inside each table is significant: rules are scanned top to bottom and
//! the first match wins, so specific endings come before the generic ones.

use crate::inflector::rule::CaseMode::{self, Insensitive, Sensitive};

pub(crate) type RuleSpec = (&'static str, &'static str, CaseMode);

/// Plural → singular rules.
pub(crate) const SINGULAR_RULES: &[RuleSpec] = &[
    ("(s)tatuses$", "${1}tatus", Insensitive),
    ("^(.*)(menu)s$", "${1}${2}", Insensitive),
    ("(quiz)zes$", "${1}", Insensitive),
    ("(matr)ices$", "${1}ix", Insensitive),
    ("(vert|ind)ices$", "${1}ex", Insensitive),
    ("^(ox)en", "${1}", Insensitive),
    ("(alias)(es)*$", "${1}", Insensitive),
    (
        "(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|viri?)i$",
        "${1}us",
        Insensitive,
    ),
    ("(cris|ax|test)es$", "${1}is", Insensitive),
    ("(shoe)s$", "${1}", Insensitive),
    ("(o)es$", "${1}", Insensitive),
    ("ouses$", "ouse", Sensitive),
    ("([^a])uses$", "${1}us", Sensitive),
    ("([m|l])ice$", "${1}ouse", Insensitive),
    ("(x|ch|ss|sh)es$", "${1}", Insensitive),
    ("(m)ovies$", "${1}ovie", Insensitive),
    ("(s)eries$", "${1}eries", Insensitive),
    ("([^aeiouy]|qu)ies$", "${1}y", Insensitive),
    ("([lr])ves$", "${1}f", Insensitive),
    ("(tive)s$", "${1}", Insensitive),
    ("(hive)s$", "${1}", Insensitive),
    ("(drive)s$", "${1}", Insensitive),
    ("([^fo])ves$", "${1}fe", Insensitive),
    ("(^analy)ses$", "${1}sis", Insensitive),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}${2}sis",
        Insensitive,
    ),
    ("([ti])a$", "${1}um", Insensitive),
    ("(p)eople$", "${1}erson", Insensitive),
    ("(m)en$", "${1}an", Insensitive),
    ("(c)hildren$", "${1}hild", Insensitive),
    ("(n)ews$", "${1}ews", Insensitive),
    ("^(.*us)$", "${1}", Sensitive),
    ("s$", "", Insensitive),
];

/// Uninflected patterns that only apply when singularizing.
pub(crate) const SINGULAR_UNINFLECTED: &[&str] = &[
    ".*[nrlm]ese",
    ".*deer",
    ".*fish",
    ".*measles",
    ".*ois",
    ".*pox",
    ".*sheep",
    ".*ss",
];

/// Singular → plural rules.
pub(crate) const PLURAL_RULES: &[RuleSpec] = &[
    ("(s)tatus$", "${1}tatuses", Insensitive),
    ("(quiz)$", "${1}zes", Insensitive),
    ("^(ox)$", "${1}en", Insensitive),
    ("([m|l])ouse$", "${1}ice", Insensitive),
    ("(matr|vert|ind)(ix|ex)$", "${1}ices", Insensitive),
    ("(x|ch|ss|sh)$", "${1}es", Insensitive),
    ("([^aeiouy]|qu)y$", "${1}ies", Insensitive),
    ("(hive)$", "${1}s", Insensitive),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves", Insensitive),
    ("sis$", "ses", Insensitive),
    ("([ti])um$", "${1}a", Insensitive),
    ("(p)erson$", "${1}eople", Insensitive),
    ("(m)an$", "${1}en", Insensitive),
    ("(c)hild$", "${1}hildren", Insensitive),
    ("(buffal|tomat)o$", "${1}oes", Insensitive),
    (
        "(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)us$",
        "${1}i",
        Insensitive,
    ),
    ("us$", "uses", Sensitive),
    ("(alias)$", "${1}es", Insensitive),
    ("(ax|cri|test)is$", "${1}es", Insensitive),
    ("s$", "s", Sensitive),
    ("^$", "", Sensitive),
    ("$", "s", Sensitive),
];

/// Uninflected patterns that only apply when pluralizing.
pub(crate) const PLURAL_UNINFLECTED: &[&str] = &[
    ".*[nrlm]ese",
    ".*deer",
    ".*fish",
    ".*measles",
    ".*ois",
    ".*pox",
    ".*sheep",
];

/// Singular → plural words that bypass the rule list.
pub(crate) const PLURAL_IRREGULAR: &[(&str, &str)] = &[
    ("atlas", "atlases"),
    ("beef", "beefs"),
    ("brother", "brothers"),
    ("child", "children"),
    ("corpus", "corpuses"),
    ("cow", "cows"),
    ("ganglion", "ganglions"),
    ("genie", "genies"),
    ("genus", "genera"),
    ("graffito", "graffiti"),
    ("hoof", "hoofs"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("leaf", "leaves"),
    ("money", "monies"),
    ("mongoose", "mongooses"),
    ("move", "moves"),
    ("mythos", "mythoi"),
    ("numen", "numina"),
    ("occiput", "occiputs"),
    ("octopus", "octopuses"),
    ("opus", "opuses"),
    ("ox", "oxen"),
    ("penis", "penises"),
    ("person", "people"),
    ("sex", "sexes"),
    ("sleeve", "sleeves"),
    ("soliloquy", "soliloquies"),
    ("tax", "taxes"),
    ("testis", "testes"),
    ("trilby", "trilbys"),
    ("turf", "turfs"),
];

/// Words (or word patterns) shared by both directions whose forms do not change.
pub(crate) const UNINFLECTED: &[&str] = &[
    "Amoyese",
    "bison",
    "Borghese",
    "bream",
    "breeches",
    "britches",
    "buffalo",
    "cantus",
    "carp",
    "chassis",
    "clippers",
    "cod",
    "coitus",
    "Congoese",
    "contretemps",
    "corps",
    "debris",
    "diabetes",
    "djinn",
    "eland",
    "elk",
    "equipment",
    "Faroese",
    "flounder",
    "Foochowese",
    "gallows",
    "Genevese",
    "Genoese",
    "Gilbertese",
    "graffiti",
    "headquarters",
    "herpes",
    "hijinks",
    "Hottentotese",
    "information",
    "innings",
    "jackanapes",
    "Kiplingese",
    "Kongoese",
    "Lucchese",
    "mackerel",
    "Maltese",
    "media",
    "mews",
    "moose",
    "mumps",
    "Nankingese",
    "news",
    "nexus",
    "Niasese",
    "People",
    "Pekingese",
    "Piedmontese",
    "pincers",
    "Pistoiese",
    "pliers",
    "Portuguese",
    "proceedings",
    "rabies",
    "rice",
    "rhinoceros",
    "salmon",
    "Sarawakese",
    "scissors",
    "sea[- ]bass",
    "series",
    "Shavese",
    "shears",
    "siemens",
    "species",
    "swine",
    "testes",
    "trousers",
    "trout",
    "tuna",
    "Vermontese",
    "Wenchowese",
    "whiting",
    "wildebeest",
    "Yengeese",
];

/// Transliteration table loaded when an inflector is created.
pub(crate) const TRANSLITERATION: &[(&str, &str)] = &[
    ("à|á|å|â", "a"),
    ("Á|À|Å|Â", "A"),
    ("è|é|ė|ê|ẽ|ë", "e"),
    ("É|È|Ė|Ê|Ē|Ë", "E"),
    ("ì|í|î", "i"),
    ("Í|Ì|Î", "I"),
    ("ò|ó|ơ|ô|ø", "o"),
    ("Ò|Ó|Ơ|Ô|Ø", "O"),
    ("ù|ú|ů|û", "u"),
    ("Ú|Ù|Ů|Û", "U"),
    ("ç|ć|č", "c"),
    ("Č|Ć|Č", "C"),
    ("đ", "dj"),
    ("Đ", "Dj"),
    ("DŽ", "Dz"),
    ("š", "s"),
    ("Š", "S"),
    ("ž", "z"),
    ("Ž", "Z"),
    ("ñ", "n"),
    ("Ñ", "N"),
    ("ä|æ", "ae"),
    ("Ä", "Ae"),
    ("ö", "oe"),
    ("Ö", "Oe"),
    ("ü", "ue"),
    ("Ü", "Ue"),
    ("ß", "ss"),
];

/// Smaller table restored by `Inflector::reset`.
pub(crate) const RESET_TRANSLITERATION: &[(&str, &str)] = &[
    ("à|á|å|â", "a"),
    ("è|é|ê|ẽ|ë", "e"),
    ("ì|í|î", "i"),
    ("ò|ó|ô|ø", "o"),
    ("ù|ú|ů|û", "u"),
    ("ç|ć|č", "c"),
    ("đ", "dj"),
    ("š", "s"),
    ("ž", "z"),
    ("ñ", "n"),
    ("ä|æ", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("Ä", "Ae"),
    ("Ü", "Ue"),
    ("Ö", "Oe"),
    ("ß", "ss"),
    ("Č|Ć", "C"),
    ("DŽ", "Dz"),
    ("Đ", "Dj"),
    ("Š", "S"),
    ("Ž", "Z"),
];
