/// One authored interpretation band: a range token and the label it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandDef {
    pub range: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum InterpretationDef {
    Banded(&'static [BandDef]),
    Descriptive(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct SubscaleDef {
    pub name: &'static str,
    pub interpretation: InterpretationDef,
}

/// How item weights combine into reported scores.
#[derive(Debug, Clone, Copy)]
pub enum LayoutDef {
    /// Sum of all items, one lookup.
    Total(&'static [BandDef]),
    /// Subscale `k` owns items at positions `k, k + n, k + 2n, ...` where `n` is the subscale count.
    Stride(&'static [SubscaleDef]),
    /// Items before `boundary` feed the first subscale, the rest feed the second.
    Split {
        boundary: usize,
        subscales: &'static [SubscaleDef],
    },
}

#[derive(Debug, Clone, Copy)]
pub struct InstrumentDef {
    pub id: &'static str,
    pub code: &'static str,
    pub items: &'static [&'static str],
    pub options: &'static [&'static str],
    pub weights: &'static [u32],
    pub layout: LayoutDef,
}

const FREQUENCY_4: &[&str] = &[
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

const K10_ITEMS: &[&str] = &[
    "In the past 4 weeks, about how often did you feel tired out for no good reason?",
    "In the past 4 weeks, about how often did you feel nervous?",
    "In the past 4 weeks, about how often did you feel so nervous that nothing could calm you down?",
    "In the past 4 weeks, about how often did you feel hopeless?",
    "In the past 4 weeks, about how often did you feel restless or fidgety?",
    "In the past 4 weeks, about how often did you feel so restless you could not sit still?",
    "In the past 4 weeks, about how often did you feel depressed?",
    "In the past 4 weeks, about how often did you feel that everything was an effort?",
    "In the past 4 weeks, about how often did you feel so sad that nothing could cheer you up?",
    "In the past 4 weeks, about how often did you feel worthless?",
];

const K10_BANDS: &[BandDef] = &[
    BandDef { range: "10–19", label: "Likely well" },
    BandDef { range: "20–24", label: "Mild distress" },
    BandDef { range: "25–29", label: "Moderate distress" },
    BandDef { range: "30–50", label: "Severe distress" },
];

const GHQ12_ITEMS: &[&str] = &[
    "Have you been able to concentrate on whatever you're doing?",
    "Have you lost much sleep over worry?",
    "Have you felt that you are playing a useful part in things?",
    "Have you felt capable of making decisions about things?",
    "Have you felt constantly under strain?",
    "Have you felt you couldn't overcome your difficulties?",
    "Have you been able to enjoy your normal day-to-day activities?",
    "Have you been able to face up to your problems?",
    "Have you been feeling unhappy or depressed?",
    "Have you been losing confidence in yourself?",
    "Have you been thinking of yourself as a worthless person?",
    "Have you been feeling reasonably happy, all things considered?",
];

const GHQ12_BANDS: &[BandDef] = &[
    BandDef { range: "0–12", label: "Low distress" },
    BandDef { range: "13–24", label: "Moderate distress" },
    BandDef { range: "25–36", label: "High distress" },
];

const PHQ9_ITEMS: &[&str] = &[
    "Little interest or pleasure in doing things",
    "Feeling down, depressed, or hopeless",
    "Trouble falling or staying asleep, or sleeping too much",
    "Feeling tired or having little energy",
    "Poor appetite or overeating",
    "Feeling bad about yourself — or that you are a failure or have let yourself or your family down",
    "Trouble concentrating on things, such as reading the newspaper or watching television",
    "Moving or speaking so slowly that other people could have noticed? Or the opposite — being so fidgety or restless that you have been moving around a lot more than usual",
    "Thoughts that you would be better off dead or of hurting yourself in some way",
];

const PHQ9_BANDS: &[BandDef] = &[
    BandDef { range: "0–4", label: "Minimal depression" },
    BandDef { range: "5–9", label: "Mild depression" },
    BandDef { range: "10–14", label: "Moderate depression" },
    BandDef { range: "15–19", label: "Moderately severe depression" },
    BandDef { range: "20–27", label: "Severe depression" },
];

const GAD7_ITEMS: &[&str] = &[
    "Feeling nervous, anxious, or on edge",
    "Not being able to stop or control worrying",
    "Worrying too much about different things",
    "Trouble relaxing",
    "Being so restless that it is hard to sit still",
    "Becoming easily annoyed or irritable",
    "Feeling afraid as if something awful might happen",
];

const GAD7_BANDS: &[BandDef] = &[
    BandDef { range: "0–4", label: "Minimal anxiety" },
    BandDef { range: "5–9", label: "Mild anxiety" },
    BandDef { range: "10–14", label: "Moderate anxiety" },
    BandDef { range: "15–21", label: "Severe anxiety" },
];

const PSS_ITEMS: &[&str] = &[
    "In the last month, how often have you been upset because of something that happened unexpectedly?",
    "In the last month, how often have you felt that you were unable to control the important things in your life?",
    "In the last month, how often have you felt nervous and stressed?",
    "In the last month, how often have you felt confident about your ability to handle your personal problems?",
    "In the last month, how often have you felt that things were going your way?",
    "In the last month, how often have you found that you could not cope with all the things that you had to do?",
    "In the last month, how often have you been able to control irritations in your life?",
    "In the last month, how often have you felt that you were on top of things?",
    "In the last month, how often have you been angered because of things that happened that were outside of your control?",
    "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?",
];

const PSS_BANDS: &[BandDef] = &[
    BandDef { range: "0–13", label: "Low stress" },
    BandDef { range: "14–26", label: "Moderate stress" },
    BandDef { range: "27–40", label: "High stress" },
];

const DASS21_ITEMS: &[&str] = &[
    "I found it hard to wind down",
    "I was aware of dryness of my mouth",
    "I couldn't seem to experience any positive feeling at all",
    "I experienced breathing difficulty (e.g., excessively rapid breathing, breathlessness in the absence of physical exertion)",
    "I found it difficult to work up the initiative to do things",
    "I tended to over-react to situations",
    "I experienced trembling (e.g., in the hands)",
    "I felt that I was using a lot of nervous energy",
    "I was worried about situations in which I might panic and make a fool of myself",
    "I felt that I had nothing to look forward to",
    "I found myself getting agitated",
    "I found it difficult to relax",
    "I felt down-hearted and blue",
    "I was intolerant of anything that kept me from getting on with what I was doing",
    "I felt I was close to panic",
    "I was unable to become enthusiastic about anything",
    "I felt I wasn't worth much as a person",
    "I felt that I was rather touchy",
    "I was aware of the action of my heart in the absence of physical exertion (e.g., sense of heart rate increase, heart missing a beat)",
    "I felt scared without any good reason",
    "I felt that life was meaningless",
];

const DASS21_OPTIONS: &[&str] = &[
    "Did not apply to me at all",
    "Applied to me to some degree, or some of the time",
    "Applied to me to a considerable degree, or a good part of time",
    "Applied to me very much, or most of the time",
];

const DASS21_DEPRESSION: &[BandDef] = &[
    BandDef { range: "0–9", label: "Normal" },
    BandDef { range: "10–13", label: "Mild" },
    BandDef { range: "14–20", label: "Moderate" },
    BandDef { range: "21–27", label: "Severe" },
    BandDef { range: "28+", label: "Extremely severe" },
];

const DASS21_ANXIETY: &[BandDef] = &[
    BandDef { range: "0–7", label: "Normal" },
    BandDef { range: "8–9", label: "Mild" },
    BandDef { range: "10–14", label: "Moderate" },
    BandDef { range: "15–19", label: "Severe" },
    BandDef { range: "20+", label: "Extremely severe" },
];

const DASS21_STRESS: &[BandDef] = &[
    BandDef { range: "0–14", label: "Normal" },
    BandDef { range: "15–18", label: "Mild" },
    BandDef { range: "19–25", label: "Moderate" },
    BandDef { range: "26–33", label: "Severe" },
    BandDef { range: "34+", label: "Extremely severe" },
];

const DASS21_SUBSCALES: &[SubscaleDef] = &[
    SubscaleDef {
        name: "Depression",
        interpretation: InterpretationDef::Banded(DASS21_DEPRESSION),
    },
    SubscaleDef {
        name: "Anxiety",
        interpretation: InterpretationDef::Banded(DASS21_ANXIETY),
    },
    SubscaleDef {
        name: "Stress",
        interpretation: InterpretationDef::Banded(DASS21_STRESS),
    },
];

const PANAS_ITEMS: &[&str] = &[
    "Interested",
    "Distressed",
    "Excited",
    "Upset",
    "Strong",
    "Guilty",
    "Scared",
    "Hostile",
    "Enthusiastic",
    "Proud",
    "Irritable",
    "Alert",
    "Ashamed",
    "Inspired",
    "Nervous",
    "Determined",
    "Attentive",
    "Jittery",
    "Active",
    "Afraid",
];

const PANAS_OPTIONS: &[&str] = &[
    "Very slightly or not at all",
    "A little",
    "Moderately",
    "Quite a bit",
    "Extremely",
];

const PANAS_SUBSCALES: &[SubscaleDef] = &[
    SubscaleDef {
        name: "Positive Affect",
        interpretation: InterpretationDef::Descriptive(
            "Higher scores indicate more positive emotions",
        ),
    },
    SubscaleDef {
        name: "Negative Affect",
        interpretation: InterpretationDef::Descriptive(
            "Higher scores indicate more negative emotions",
        ),
    },
];

const POMS_ITEMS: &[&str] = &[
    "Tense",
    "Angry",
    "Worn out",
    "Unhappy",
    "Lively",
    "Confused",
    "Sad",
    "Active",
    "On edge",
    "Energetic",
    "Fatigued",
    "Friendly",
    "Bitter",
    "Weary",
    "Alert",
    "Resentful",
    "Exhausted",
    "Cheerful",
    "Annoyed",
    "Lonely",
];

const INTENSITY_5: &[&str] = &[
    "Not at all",
    "A little",
    "Moderately",
    "Quite a bit",
    "Extremely",
];

const POMS_SUBSCALES: &[SubscaleDef] = &[
    SubscaleDef {
        name: "Tension",
        interpretation: InterpretationDef::Descriptive("Higher scores indicate more tension"),
    },
    SubscaleDef {
        name: "Depression",
        interpretation: InterpretationDef::Descriptive("Higher scores indicate more depression"),
    },
    SubscaleDef {
        name: "Anger",
        interpretation: InterpretationDef::Descriptive("Higher scores indicate more anger"),
    },
    SubscaleDef {
        name: "Vigor",
        interpretation: InterpretationDef::Descriptive("Higher scores indicate more vigor"),
    },
    SubscaleDef {
        name: "Fatigue",
        interpretation: InterpretationDef::Descriptive("Higher scores indicate more fatigue"),
    },
    SubscaleDef {
        name: "Confusion",
        interpretation: InterpretationDef::Descriptive("Higher scores indicate more confusion"),
    },
];

const CDS_ITEMS: &[&str] = &[
    "I often think that if something bad happens, it will ruin everything",
    "I tend to blame myself for things that go wrong, even if they are not my fault",
    "I often think that if I don't do something perfectly, I have failed",
    "I frequently assume that others are thinking negatively about me",
    "I often think that if something bad happens, it will last forever",
    "I tend to focus on the negative aspects of situations and ignore the positive ones",
    "I often think that if I make a mistake, it means I am a failure",
    "I frequently assume that the worst will happen",
    "I often think that if someone disagrees with me, it means they don't like me",
    "I tend to think in extremes, such as all-or-nothing or black-and-white",
];

const CDS_BANDS: &[BandDef] = &[
    BandDef { range: "0–20", label: "Minimal cognitive distortions" },
    BandDef { range: "21–30", label: "Mild cognitive distortions" },
    BandDef { range: "31–40", label: "Moderate cognitive distortions" },
    BandDef { range: "41–50", label: "Severe cognitive distortions" },
];

const SHI_ITEMS: &[&str] = &[
    "Have you ever deliberately cut yourself?",
    "Have you ever deliberately burned yourself?",
    "Have you ever deliberately hit yourself?",
    "Have you ever deliberately scratched yourself?",
    "Have you ever deliberately pulled your hair?",
    "Have you ever deliberately prevented wounds from healing?",
    "Have you ever deliberately taken an overdose of medication?",
    "Have you ever deliberately taken a substance to harm yourself?",
    "Have you ever deliberately put yourself in a dangerous situation?",
    "Have you ever deliberately driven recklessly to harm yourself?",
];

// Single-point band: SHI is the one table using a bare integer token.
const SHI_BANDS: &[BandDef] = &[
    BandDef { range: "0", label: "No self-harm" },
    BandDef { range: "1–3", label: "Mild self-harm" },
    BandDef { range: "4–6", label: "Moderate self-harm" },
    BandDef { range: "7–10", label: "Severe self-harm" },
];

const BUILTIN_INSTRUMENTS: &[InstrumentDef] = &[
    InstrumentDef {
        id: "K10 (Kessler Psychological Distress Scale)",
        code: "K10",
        items: K10_ITEMS,
        options: &[
            "None of the time",
            "A little of the time",
            "Some of the time",
            "Most of the time",
            "All of the time",
        ],
        weights: &[1, 2, 3, 4, 5],
        layout: LayoutDef::Total(K10_BANDS),
    },
    InstrumentDef {
        id: "GHQ-12 (General Health Questionnaire-12)",
        code: "GHQ-12",
        items: GHQ12_ITEMS,
        options: &[
            "Not at all",
            "No more than usual",
            "Rather more than usual",
            "Much more than usual",
        ],
        weights: &[0, 1, 2, 3],
        layout: LayoutDef::Total(GHQ12_BANDS),
    },
    InstrumentDef {
        id: "PHQ-9 (Patient Health Questionnaire-9)",
        code: "PHQ-9",
        items: PHQ9_ITEMS,
        options: FREQUENCY_4,
        weights: &[0, 1, 2, 3],
        layout: LayoutDef::Total(PHQ9_BANDS),
    },
    InstrumentDef {
        id: "GAD-7 (Generalized Anxiety Disorder-7)",
        code: "GAD-7",
        items: GAD7_ITEMS,
        options: FREQUENCY_4,
        weights: &[0, 1, 2, 3],
        layout: LayoutDef::Total(GAD7_BANDS),
    },
    InstrumentDef {
        id: "PSS (Perceived Stress Scale)",
        code: "PSS",
        items: PSS_ITEMS,
        options: &["Never", "Almost never", "Sometimes", "Fairly often", "Very often"],
        weights: &[0, 1, 2, 3, 4],
        layout: LayoutDef::Total(PSS_BANDS),
    },
    InstrumentDef {
        id: "DASS-21 (Depression, Anxiety, and Stress Scale)",
        code: "DASS-21",
        items: DASS21_ITEMS,
        options: DASS21_OPTIONS,
        weights: &[0, 1, 2, 3],
        layout: LayoutDef::Stride(DASS21_SUBSCALES),
    },
    InstrumentDef {
        id: "PANAS (Positive and Negative Affect Schedule)",
        code: "PANAS",
        items: PANAS_ITEMS,
        options: PANAS_OPTIONS,
        weights: &[1, 2, 3, 4, 5],
        layout: LayoutDef::Split {
            boundary: 10,
            subscales: PANAS_SUBSCALES,
        },
    },
    InstrumentDef {
        id: "POMS (Profile of Mood States)",
        code: "POMS",
        items: POMS_ITEMS,
        options: INTENSITY_5,
        weights: &[0, 1, 2, 3, 4],
        layout: LayoutDef::Stride(POMS_SUBSCALES),
    },
    InstrumentDef {
        id: "CDS (Cognitive Distortions Scale)",
        code: "CDS",
        items: CDS_ITEMS,
        options: &["Never", "Rarely", "Sometimes", "Often", "Always"],
        weights: &[1, 2, 3, 4, 5],
        layout: LayoutDef::Total(CDS_BANDS),
    },
    InstrumentDef {
        id: "SHI (Self-Harm Inventory)",
        code: "SHI",
        items: SHI_ITEMS,
        options: &["No", "Yes"],
        weights: &[0, 1],
        layout: LayoutDef::Total(SHI_BANDS),
    },
];

pub fn builtin_instruments() -> &'static [InstrumentDef] {
    BUILTIN_INSTRUMENTS
}
