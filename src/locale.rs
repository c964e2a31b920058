//! Locale name tables.
//!
//! Locales only supply strings; they carry no calendrical rules. Month names
//! depend on the calendar being displayed, weekday names are listed starting
//! from Sunday and rotated by the calendar's first weekday at lookup time.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Calendar, DateError, Meridiem, prelude::*};

/// A `(name, short name)` pair.
pub type NamePair = (&'static str, &'static str);

/// Display languages for names and digits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    #[display(fmt = "en")]
    En,
    /// Farsi
    #[display(fmt = "fa")]
    Fa,
    /// Arabic
    #[display(fmt = "ar")]
    Ar,
    /// Hindi
    #[display(fmt = "hi")]
    Hi,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Self; 4] = [Self::En, Self::Fa, Self::Ar, Self::Hi];

    /// The lowercase key used to select this locale.
    pub const fn key(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
            Self::Ar => "ar",
            Self::Hi => "hi",
        }
    }

    /// English name of the language.
    pub const fn title(self) -> &'static str {
        match self {
            Self::En => "english",
            Self::Fa => "farsi",
            Self::Ar => "arabic",
            Self::Hi => "hindi",
        }
    }

    /// Month names of `calendar`, January-equivalent first.
    pub fn months(self, calendar: Calendar) -> &'static [NamePair; 12] {
        match calendar {
            Calendar::Gregorian => match self {
                Self::En => &GREGORIAN_EN,
                Self::Fa => &GREGORIAN_FA,
                Self::Ar => &GREGORIAN_AR,
                Self::Hi => &GREGORIAN_HI,
            },
            Calendar::Persian => match self {
                Self::En => &PERSIAN_EN,
                Self::Fa => &PERSIAN_FA,
                Self::Ar => &PERSIAN_AR,
                Self::Hi => &PERSIAN_HI,
            },
            Calendar::Arabic => match self {
                Self::En => &ARABIC_EN,
                Self::Fa => &ARABIC_FA,
                Self::Ar => &ARABIC_AR,
                Self::Hi => &ARABIC_HI,
            },
            Calendar::Indian => match self {
                Self::En => &INDIAN_EN,
                Self::Fa => &INDIAN_FA,
                Self::Ar => &INDIAN_AR,
                Self::Hi => &INDIAN_HI,
            },
        }
    }

    /// Weekday names, Sunday first.
    pub fn week_days(self) -> &'static [NamePair; 7] {
        match self {
            Self::En => &WEEK_DAYS_EN,
            Self::Fa => &WEEK_DAYS_FA,
            Self::Ar => &WEEK_DAYS_AR,
            Self::Hi => &WEEK_DAYS_HI,
        }
    }

    /// Ante and post meridiem labels, in that order.
    pub fn meridiems(self) -> &'static [Meridiem; 2] {
        match self {
            Self::En => &MERIDIEMS_EN,
            Self::Fa => &MERIDIEMS_FA,
            Self::Ar => &MERIDIEMS_AR,
            Self::Hi => &MERIDIEMS_HI,
        }
    }

    /// Glyphs for the digits 0 through 9.
    pub fn digits(self) -> &'static [&'static str; 10] {
        match self {
            Self::En => &DIGITS_EN,
            Self::Fa => &DIGITS_FA,
            Self::Ar => &DIGITS_AR,
            Self::Hi => &DIGITS_HI,
        }
    }
}

impl FromStr for Locale {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| DateError::UnknownLocale(s.to_owned()))
    }
}

/// Value of `glyph` if it is a digit in any supported locale.
pub fn digit_value(glyph: char) -> Option<u8> {
    if let Some(value) = glyph.to_digit(10) {
        return u8::try_from(value).ok();
    }
    Locale::ALL.iter().find_map(|locale| {
        locale
            .digits()
            .iter()
            .position(|d| d.chars().eq(std::iter::once(glyph)))
            .and_then(|p| u8::try_from(p).ok())
    })
}

static GREGORIAN_EN: [NamePair; 12] = [
    ("January", "Jan"),
    ("February", "Feb"),
    ("March", "Mar"),
    ("April", "Apr"),
    ("May", "May"),
    ("June", "Jun"),
    ("July", "Jul"),
    ("August", "Aug"),
    ("September", "Sep"),
    ("October", "Oct"),
    ("November", "Nov"),
    ("December", "Dec"),
];

static GREGORIAN_FA: [NamePair; 12] = [
    ("ژانویه", "ژانویه"),
    ("فوریه", "فوریه"),
    ("مارس", "مارس"),
    ("آوریل", "آوریل"),
    ("مه", "مه"),
    ("ژوئن", "ژوئن"),
    ("ژوئیه", "ژوئیه"),
    ("اوت", "اوت"),
    ("سپتامبر", "سپتامبر"),
    ("اکتبر", "اکتبر"),
    ("نوامبر", "نوامبر"),
    ("دسامبر", "دسامبر"),
];

static GREGORIAN_AR: [NamePair; 12] = [
    ("يناير", "يناير"),
    ("فبراير", "فبراير"),
    ("مارس", "مارس"),
    ("أبريل", "أبريل"),
    ("مايو", "مايو"),
    ("يونيو", "يونيو"),
    ("يوليو", "يوليو"),
    ("أغسطس", "أغسطس"),
    ("سبتمبر", "سبتمبر"),
    ("أكتوبر", "أكتوبر"),
    ("نوفمبر", "نوفمبر"),
    ("ديسمبر", "ديسمبر"),
];

static GREGORIAN_HI: [NamePair; 12] = [
    ("जनवरी", "जन"),
    ("फ़रवरी", "फ़र"),
    ("मार्च", "मार्च"),
    ("अप्रैल", "अप्रै"),
    ("मई", "मई"),
    ("जून", "जून"),
    ("जुलाई", "जुला"),
    ("अगस्त", "अग"),
    ("सितंबर", "सितं"),
    ("अक्टूबर", "अक्टू"),
    ("नवंबर", "नवं"),
    ("दिसंबर", "दिसं"),
];

static PERSIAN_EN: [NamePair; 12] = [
    ("Farvardin", "Far"),
    ("Ordibehesht", "Ord"),
    ("Khordad", "Kho"),
    ("Tir", "Tir"),
    ("Mordad", "Mor"),
    ("Shahrivar", "Sha"),
    ("Mehr", "Meh"),
    ("Aban", "Aba"),
    ("Azar", "Aza"),
    ("Dey", "Dey"),
    ("Bahman", "Bah"),
    ("Esfand", "Esf"),
];

static PERSIAN_FA: [NamePair; 12] = [
    ("فروردین", "فر"),
    ("اردیبهشت", "ار"),
    ("خرداد", "خر"),
    ("تیر", "تیر"),
    ("مرداد", "مر"),
    ("شهریور", "شه"),
    ("مهر", "مهر"),
    ("آبان", "آبا"),
    ("آذر", "آذر"),
    ("دی", "دی"),
    ("بهمن", "بهم"),
    ("اسفند", "اسف"),
];

static PERSIAN_AR: [NamePair; 12] = [
    ("فروردين", "فروردين"),
    ("أرديبهشت", "أرديبهشت"),
    ("خرداد", "خرداد"),
    ("تير", "تير"),
    ("مرداد", "مرداد"),
    ("شهريور", "شهريور"),
    ("مهر", "مهر"),
    ("آبان", "آبان"),
    ("آذر", "آذر"),
    ("دي", "دي"),
    ("بهمن", "بهمن"),
    ("اسفند", "اسفند"),
];

static PERSIAN_HI: [NamePair; 12] = [
    ("फ़रवर्दिन", "फ़र"),
    ("उर्दिबेहेश्त", "उर्दि"),
    ("ख़ुर्दाद", "ख़ुर"),
    ("तीर", "तीर"),
    ("मुरदाद", "मुर"),
    ("शहरीवर", "शह"),
    ("मेहर", "मेह"),
    ("आबान", "आबा"),
    ("आज़र", "आज़"),
    ("दे", "दे"),
    ("बहमन", "बह"),
    ("इस्फ़न्द", "इस्फ़"),
];

static ARABIC_EN: [NamePair; 12] = [
    ("Muharram", "Muh"),
    ("Safar", "Saf"),
    ("Rabi ul-Awwal", "Rab1"),
    ("Rabi ul-Thani", "Rab2"),
    ("Jumada al-Awwal", "Jum1"),
    ("Jumada al-Thani", "Jum2"),
    ("Rajab", "Raj"),
    ("Shaban", "Shb"),
    ("Ramadan", "Ram"),
    ("Shawwal", "Shw"),
    ("Dhu al-Qadah", "DhQ"),
    ("Dhu al-Hijjah", "DhH"),
];

static ARABIC_FA: [NamePair; 12] = [
    ("محرم", "محرم"),
    ("صفر", "صفر"),
    ("ربیع‌الاول", "ربیع۱"),
    ("ربیع‌الثانی", "ربیع۲"),
    ("جمادی‌الاول", "جمادی۱"),
    ("جمادی‌الثانی", "جمادی۲"),
    ("رجب", "رجب"),
    ("شعبان", "شعبان"),
    ("رمضان", "رمضان"),
    ("شوال", "شوال"),
    ("ذیقعده", "ذیقعده"),
    ("ذیحجه", "ذیحجه"),
];

static ARABIC_AR: [NamePair; 12] = [
    ("محرم", "محرم"),
    ("صفر", "صفر"),
    ("ربيع الأول", "ربيع ١"),
    ("ربيع الآخر", "ربيع ٢"),
    ("جمادى الأولى", "جمادى ١"),
    ("جمادى الآخرة", "جمادى ٢"),
    ("رجب", "رجب"),
    ("شعبان", "شعبان"),
    ("رمضان", "رمضان"),
    ("شوال", "شوال"),
    ("ذو القعدة", "ذو القعدة"),
    ("ذو الحجة", "ذو الحجة"),
];

static ARABIC_HI: [NamePair; 12] = [
    ("मुहर्रम", "मुह"),
    ("सफ़र", "सफ़"),
    ("रबी-उल-अव्वल", "रबी१"),
    ("रबी-उल-सानी", "रबी२"),
    ("जुमादा-उल-अव्वल", "जुमा१"),
    ("जुमादा-उल-सानी", "जुमा२"),
    ("रजब", "रज"),
    ("शाबान", "शा"),
    ("रमज़ान", "रम"),
    ("शव्वाल", "शव"),
    ("ज़ुल-क़ादा", "ज़ुल-क़ा"),
    ("ज़ुल-हिज्जा", "ज़ुल-हि"),
];

static INDIAN_EN: [NamePair; 12] = [
    ("Chaitra", "Cha"),
    ("Vaishakha", "Vai"),
    ("Jyeshtha", "Jye"),
    ("Ashadha", "Ash"),
    ("Shravana", "Shr"),
    ("Bhadra", "Bha"),
    ("Ashvin", "Asv"),
    ("Kartika", "Kar"),
    ("Agrahayana", "Agr"),
    ("Pausha", "Pau"),
    ("Magha", "Mag"),
    ("Phalguna", "Pha"),
];

static INDIAN_FA: [NamePair; 12] = [
    ("چیترا", "چیترا"),
    ("ویشاکا", "ویشاکا"),
    ("جیشتا", "جیشتا"),
    ("آشادا", "آشادا"),
    ("شراوانا", "شراوانا"),
    ("بادرا", "بادرا"),
    ("آشوین", "آشوین"),
    ("کارتیکا", "کارتیکا"),
    ("آگراهایانا", "آگراهایانا"),
    ("پاوشا", "پاوشا"),
    ("ماگا", "ماگا"),
    ("پالگونا", "پالگونا"),
];

static INDIAN_AR: [NamePair; 12] = [
    ("تشيترا", "تشيترا"),
    ("فايشاخا", "فايشاخا"),
    ("جيشثا", "جيشثا"),
    ("آشادا", "آشادا"),
    ("شرافانا", "شرافانا"),
    ("بهادرا", "بهادرا"),
    ("أشفين", "أشفين"),
    ("كارتيكا", "كارتيكا"),
    ("أغراهايانا", "أغراهايانا"),
    ("بوشا", "بوشا"),
    ("ماغا", "ماغا"),
    ("فالغونا", "فالغونا"),
];

static INDIAN_HI: [NamePair; 12] = [
    ("चैत्र", "चैत्र"),
    ("वैशाख", "वैशाख"),
    ("ज्येष्ठ", "ज्येष्ठ"),
    ("आषाढ़", "आषाढ़"),
    ("श्रावण", "श्रावण"),
    ("भाद्रपद", "भाद्र"),
    ("आश्विन", "आश्वि"),
    ("कार्तिक", "कार्ति"),
    ("अग्रहायण", "अग्र"),
    ("पौष", "पौष"),
    ("माघ", "माघ"),
    ("फाल्गुन", "फाल्गु"),
];

static WEEK_DAYS_EN: [NamePair; 7] = [
    ("Sunday", "Sun"),
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
];

static WEEK_DAYS_FA: [NamePair; 7] = [
    ("یکشنبه", "ی"),
    ("دوشنبه", "د"),
    ("سه‌شنبه", "س"),
    ("چهارشنبه", "چ"),
    ("پنجشنبه", "پ"),
    ("جمعه", "ج"),
    ("شنبه", "ش"),
];

static WEEK_DAYS_AR: [NamePair; 7] = [
    ("الأحد", "ح"),
    ("الإثنين", "ن"),
    ("الثلاثاء", "ث"),
    ("الأربعاء", "ر"),
    ("الخميس", "خ"),
    ("الجمعة", "ج"),
    ("السبت", "س"),
];

static WEEK_DAYS_HI: [NamePair; 7] = [
    ("रविवार", "रवि"),
    ("सोमवार", "सोम"),
    ("मंगलवार", "मंगल"),
    ("बुधवार", "बुध"),
    ("गुरुवार", "गुरु"),
    ("शुक्रवार", "शुक्र"),
    ("शनिवार", "शनि"),
];

static MERIDIEMS_EN: [Meridiem; 2] = [
    Meridiem {
        name:       "AM",
        short_name: "am",
    },
    Meridiem {
        name:       "PM",
        short_name: "pm",
    },
];

static MERIDIEMS_FA: [Meridiem; 2] = [
    Meridiem {
        name:       "قبل از ظهر",
        short_name: "ق.ظ",
    },
    Meridiem {
        name:       "بعد از ظهر",
        short_name: "ب.ظ",
    },
];

static MERIDIEMS_AR: [Meridiem; 2] = [
    Meridiem {
        name:       "صباحا",
        short_name: "ص",
    },
    Meridiem {
        name:       "مساء",
        short_name: "م",
    },
];

static MERIDIEMS_HI: [Meridiem; 2] = [
    Meridiem {
        name:       "पूर्वाह्न",
        short_name: "पूर्वा",
    },
    Meridiem {
        name:       "अपराह्न",
        short_name: "अपरा",
    },
];

static DIGITS_EN: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
static DIGITS_FA: [&str; 10] = ["۰", "۱", "۲", "۳", "۴", "۵", "۶", "۷", "۸", "۹"];
static DIGITS_AR: [&str; 10] = ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"];
static DIGITS_HI: [&str; 10] = ["०", "१", "२", "३", "४", "५", "६", "७", "८", "९"];
