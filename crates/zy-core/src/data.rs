//! Static symbol tables: the eight trigrams and the sixty-four hexagrams
//! in King Wen order.
//!
//! Pure data, no behavior. The catalog builds owned values from these
//! records once at startup.

use crate::trigram::Element;

pub(crate) struct TrigramRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub english: &'static str,
    pub character: &'static str,
    pub symbol: &'static str,
    pub lines: [bool; 3],
    pub element: Element,
    pub direction: &'static str,
    pub season: &'static str,
    pub meaning: &'static str,
}

pub(crate) struct HexagramRecord {
    pub number: u32,
    pub id: &'static str,
    pub name: &'static str,
    pub character: &'static str,
    pub english: &'static str,
    pub upper: &'static str,
    pub lower: &'static str,
    pub judgment: &'static str,
    pub image: &'static str,
    /// Order: general, love, career, health, finance, advice.
    pub meanings: [&'static str; 6],
    /// (text, meaning) per position 1-6, bottom-to-top.
    pub lines: [(&'static str, &'static str); 6],
}

pub(crate) const TRIGRAMS: [TrigramRecord; 8] = [
    TrigramRecord {
        id: "qian",
        name: "Qian",
        english: "Heaven",
        character: "乾",
        symbol: "☰",
        lines: [true, true, true],
        element: Element::Metal,
        direction: "Northwest",
        season: "late autumn",
        meaning: "the creative, strength",
    },
    TrigramRecord {
        id: "kun",
        name: "Kun",
        english: "Earth",
        character: "坤",
        symbol: "☷",
        lines: [false, false, false],
        element: Element::Earth,
        direction: "Southwest",
        season: "late summer",
        meaning: "the receptive, devotion",
    },
    TrigramRecord {
        id: "zhen",
        name: "Zhen",
        english: "Thunder",
        character: "震",
        symbol: "☳",
        lines: [true, false, false],
        element: Element::Wood,
        direction: "East",
        season: "spring",
        meaning: "the arousing, movement",
    },
    TrigramRecord {
        id: "kan",
        name: "Kan",
        english: "Water",
        character: "坎",
        symbol: "☵",
        lines: [false, true, false],
        element: Element::Water,
        direction: "North",
        season: "winter",
        meaning: "the abysmal, danger",
    },
    TrigramRecord {
        id: "gen",
        name: "Gen",
        english: "Mountain",
        character: "艮",
        symbol: "☶",
        lines: [false, false, true],
        element: Element::Earth,
        direction: "Northeast",
        season: "late winter",
        meaning: "keeping still, rest",
    },
    TrigramRecord {
        id: "xun",
        name: "Xun",
        english: "Wind",
        character: "巽",
        symbol: "☴",
        lines: [false, true, true],
        element: Element::Wood,
        direction: "Southeast",
        season: "early summer",
        meaning: "the gentle, penetration",
    },
    TrigramRecord {
        id: "li",
        name: "Li",
        english: "Fire",
        character: "離",
        symbol: "☲",
        lines: [true, false, true],
        element: Element::Fire,
        direction: "South",
        season: "summer",
        meaning: "the clinging, clarity",
    },
    TrigramRecord {
        id: "dui",
        name: "Dui",
        english: "Lake",
        character: "兌",
        symbol: "☱",
        lines: [true, true, false],
        element: Element::Metal,
        direction: "West",
        season: "autumn",
        meaning: "the joyous, pleasure",
    },
];

pub(crate) const HEXAGRAMS: [HexagramRecord; 64] = [
    HexagramRecord {
        number: 1,
        id: "hex-01",
        name: "Qian",
        character: "乾",
        english: "The Creative",
        upper: "qian",
        lower: "qian",
        judgment: "The Creative works sublime success; perseverance brings reward.",
        image: "Heaven moves with strength; the noble one grows tireless in self-renewal.",
        meanings: [
            "Pure creative force is at work; great energy seeks expression.",
            "Passion runs strong; lead with warmth rather than command.",
            "A time of leadership and bold initiative; take the front.",
            "Vitality is high; channel it before it turns restless.",
            "Strong growth favors decisive, well-planned ventures.",
            "Act from principle and keep moving; strength must stay upright.",
        ],
        lines: [
            ("Hidden dragon. Do not act.", "The time is not ripe; build strength in quiet."),
            ("Dragon appearing in the field. It furthers to see the great person.", "Emerging influence; seek wise counsel."),
            ("All day the noble one is creatively active; at nightfall the mind is still wary.", "Effort at the threshold; stay alert and no blame comes."),
            ("Wavering flight over the depths. No blame.", "A turning point; the leap may be tested freely."),
            ("Flying dragon in the heavens. It furthers to see the great person.", "Influence at its height; act and be seen."),
            ("Arrogant dragon will have cause to repent.", "Overreach invites the fall; withdraw in time."),
        ],
    },
    HexagramRecord {
        number: 2,
        id: "hex-02",
        name: "Kun",
        character: "坤",
        english: "The Receptive",
        upper: "kun",
        lower: "kun",
        judgment: "The Receptive brings sublime success through the perseverance of a mare; do not lead, but follow.",
        image: "The earth carries all things; the noble one supports the world with breadth of character.",
        meanings: [
            "Receptive strength: yield, carry, and complete what another begins.",
            "Devotion deepens the bond; let things unfold without forcing.",
            "Supporting roles flourish; excel by serving the larger effort.",
            "Rest and steady nourishment restore you.",
            "Conserve and consolidate; slow gains are sound.",
            "Follow rather than lead, and the way opens of itself.",
        ],
        lines: [
            ("Hoarfrost underfoot: solid ice is near.", "Small signs of decline; prepare early."),
            ("Straight, square, great: nothing remains unfurthered.", "Natural integrity succeeds without striving."),
            ("Hidden lines; one is able to remain persevering.", "Work without claiming credit; completion comes."),
            ("A tied-up sack. No blame, no praise.", "Caution and reserve keep you safe."),
            ("A yellow lower garment brings supreme good fortune.", "Modesty in a high place wins trust."),
            ("Dragons fight in the meadow; their blood is black and yellow.", "Rivalry at the limit harms both sides."),
        ],
    },
    HexagramRecord {
        number: 3,
        id: "hex-03",
        name: "Zhun",
        character: "屯",
        english: "Difficulty at the Beginning",
        upper: "kan",
        lower: "zhen",
        judgment: "Difficulty at the beginning works supreme success; do not press forward, appoint helpers.",
        image: "Clouds and thunder: the noble one brings order out of confusion.",
        meanings: [
            "A sprouting time: chaos now, promise later.",
            "Early confusion; patience lets the bond take root.",
            "New undertakings struggle at first; gather allies.",
            "Early symptoms deserve attention before they grow.",
            "Do not overextend at the start; build slowly.",
            "Persevere, accept help, and do not force the pace.",
        ],
        lines: [
            ("Hesitation and hindrance; it furthers to appoint helpers.", "Obstacles at the outset; stay put and organize."),
            ("Difficulties pile up; the horses turn back. Ten years, then the return.", "Refuse the easy rescue; the right moment comes late."),
            ("Whoever hunts deer without the forester loses the way.", "Without guidance, desist; pressing on brings humiliation."),
            ("Horse and wagon part; strive for union.", "Accept an offered alliance; go forward together."),
            ("Small perseverance succeeds, great perseverance fails.", "Influence is blocked; proceed in small steps."),
            ("Horse and wagon part; tears of blood are shed.", "Despair at the impasse; do not persist in it."),
        ],
    },
    HexagramRecord {
        number: 4,
        id: "hex-04",
        name: "Meng",
        character: "蒙",
        english: "Youthful Folly",
        upper: "gen",
        lower: "kan",
        judgment: "It is not I who seek the young fool; the young fool seeks me. At the first oracle I inform him.",
        image: "A spring wells up at the foot of the mountain: the noble one nourishes character through thoroughness.",
        meanings: [
            "Inexperience asks for guidance; learning is the work now.",
            "Immaturity clouds the heart; grow before you promise.",
            "Accept instruction; apprenticeship precedes mastery.",
            "Habits born of ignorance wear you down; learn your constitution.",
            "Do not invest in what you do not understand.",
            "Ask once, sincerely, and honor the answer you get.",
        ],
        lines: [
            ("To make a fool develop, discipline helps at first.", "Structure aids the beginner; do not humiliate."),
            ("To bear with fools in kindness brings good fortune.", "Patience with the unripe carries the task."),
            ("Do not take a maiden who loses herself at the sight of gold.", "Do not give yourself away; keep dignity."),
            ("Entangled folly brings humiliation.", "Fantasy without a teacher dead-ends; turn back."),
            ("Childlike folly brings good fortune.", "Honest openness draws the right teaching."),
            ("In punishing folly, it does not further to commit transgressions.", "Correct, but do not avenge; restraint teaches."),
        ],
    },
    HexagramRecord {
        number: 5,
        id: "hex-05",
        name: "Xu",
        character: "需",
        english: "Waiting",
        upper: "kan",
        lower: "qian",
        judgment: "Waiting with sincerity brings light and success; it furthers to cross the great water.",
        image: "Clouds rise up to heaven: the noble one eats and drinks, joyous and of good cheer.",
        meanings: [
            "The rain will come; strength waits without fretting.",
            "Do not press for an answer; certainty ripens.",
            "The plan is sound but premature; hold position.",
            "Recovery needs time; nourish yourself meanwhile.",
            "Hold steady; the favorable moment is not yet.",
            "Wait in confidence, not in idleness.",
        ],
        lines: [
            ("Waiting in the meadow: it furthers to abide in what endures.", "Danger is still far; keep ordinary life steady."),
            ("Waiting on the sand: some gossip, but the end brings good fortune.", "Minor friction; do not answer in kind."),
            ("Waiting in the mud invites the arrival of the enemy.", "A premature advance exposes you; be watchful."),
            ("Waiting in blood: get out of the pit.", "In grave straits, stand still and let fate move."),
            ("Waiting at meat and drink: perseverance brings good fortune.", "A respite inside the struggle; take it gratefully."),
            ("Three uninvited guests arrive: honor them, and the end brings good fortune.", "The unexpected resolves things; receive it well."),
        ],
    },
    HexagramRecord {
        number: 6,
        id: "hex-06",
        name: "Song",
        character: "訟",
        english: "Conflict",
        upper: "qian",
        lower: "kan",
        judgment: "Conflict: sincerity obstructed. A cautious halt halfway brings good fortune; going to the end brings misfortune.",
        image: "Heaven and water go opposite ways: the noble one considers the beginning in all transactions.",
        meanings: [
            "Opposition of wills; a contest that cannot be fully won.",
            "Quarrels harden; seek the mediator, not the victory.",
            "Dispute with superiors or partners; compromise early.",
            "Tension wears the body; release the quarrel.",
            "Litigation drains; settle rather than escalate.",
            "Meet the other halfway; avoid the final clash.",
        ],
        lines: [
            ("If one does not perpetuate the affair, the end brings good fortune.", "Drop the dispute early; the sting fades."),
            ("One cannot engage in conflict; one returns home and gives way.", "Retreat before superior force spares your people."),
            ("To nourish oneself on ancient virtue induces perseverance.", "Live on earned merit; do not contend for show."),
            ("One turns back and submits to fate.", "Let the claim go; a changed heart finds peace."),
            ("To contend before him brings supreme good fortune.", "A just arbiter exists; present the case plainly."),
            ("Even if one is given a leather belt, by morning it is thrice torn away.", "A won fight invites endless attack; the victory is hollow."),
        ],
    },
    HexagramRecord {
        number: 7,
        id: "hex-07",
        name: "Shi",
        character: "師",
        english: "The Army",
        upper: "kun",
        lower: "kan",
        judgment: "The army needs perseverance and a strong leader; good fortune without blame.",
        image: "Water in the midst of the earth: the noble one increases the masses by generosity toward the people.",
        meanings: [
            "Disciplined collective effort under clear command.",
            "Loyalty is tested; protect what you share.",
            "Organize, delegate, and lead from principle.",
            "Discipline in regimen defends your strength.",
            "Coordinated effort and strict budgets win.",
            "Order and a worthy cause make strength lawful.",
        ],
        lines: [
            ("An army must set forth in proper order; disorder brings misfortune.", "Begin with rules, or the effort scatters."),
            ("In the midst of the army: the king bestows a triple decoration.", "Lead from among your people; honor follows."),
            ("Perchance the army carries corpses in the wagon: misfortune.", "Divided command ruins the campaign."),
            ("The army retreats: no blame.", "Orderly withdrawal before superior force is wisdom."),
            ("There is game in the field; let the eldest lead the army.", "Answer provocation, but under the right leader."),
            ("The great prince issues commands; small people should not be employed.", "Reward after victory; keep the unfit from office."),
        ],
    },
    HexagramRecord {
        number: 8,
        id: "hex-08",
        name: "Bi",
        character: "比",
        english: "Holding Together",
        upper: "kan",
        lower: "kun",
        judgment: "Holding together brings good fortune; those who are uncertain join gradually, the late-comer meets misfortune.",
        image: "On the earth is water: the kings of old granted fiefs and cultivated friendly relations.",
        meanings: [
            "Union around a center; belonging chosen in time.",
            "Commit wholeheartedly or release; half-bonds corrode.",
            "Alliances form; join the group whose center holds.",
            "Community supports recovery; do not isolate.",
            "Pool resources with the trustworthy.",
            "Come when it is time to come; the late find the door shut.",
        ],
        lines: [
            ("Hold to him in truth and loyalty: fullness attracts good fortune.", "Sincerity is the whole foundation."),
            ("Hold to him inwardly: perseverance brings good fortune.", "Loyalty from one's own center, not flattery."),
            ("You hold together with the wrong people.", "Misplaced intimacy; loosen the tie in time."),
            ("Hold to him outwardly also: perseverance brings good fortune.", "Show allegiance openly to the worthy."),
            ("The king uses beaters on three sides only.", "Lead without coercion; let the free choose you."),
            ("He finds no head for holding together: misfortune.", "A union missed at the start cannot be completed."),
        ],
    },
    HexagramRecord {
        number: 9,
        id: "hex-09",
        name: "Xiao Chu",
        character: "小畜",
        english: "The Taming Power of the Small",
        upper: "xun",
        lower: "qian",
        judgment: "The small restrains: dense clouds, no rain from our western region.",
        image: "The wind drives across heaven: the noble one refines the outward aspect of his nature.",
        meanings: [
            "Small restraints delay great force; influence works by gentleness.",
            "Small gestures carry the day; do not push.",
            "Progress through detail work; the big move must wait.",
            "Minor complaints respond to small corrections.",
            "Accumulate little by little; no windfalls yet.",
            "Be content to prepare while the rain holds off.",
        ],
        lines: [
            ("Return to the way: how could there be blame in this?", "Go back to your own path quietly."),
            ("He allows himself to be drawn into returning: good fortune.", "Follow the example of sensible companions."),
            ("The spokes burst out of the wagon wheels.", "Forcing ahead breaks the means; quarrels follow."),
            ("If you are sincere, blood vanishes and fear gives way.", "Honest mediation dissolves the danger."),
            ("If you are sincere and loyally attached, you are rich in your neighbor.", "Shared trust multiplies what each has."),
            ("The rain comes, there is rest: the moon is nearly full.", "Success through accumulation; now stop pressing."),
        ],
    },
    HexagramRecord {
        number: 10,
        id: "hex-10",
        name: "Lu",
        character: "履",
        english: "Treading",
        upper: "qian",
        lower: "dui",
        judgment: "Treading upon the tail of the tiger: it does not bite; success.",
        image: "Heaven above, the lake below: the noble one discriminates between high and low.",
        meanings: [
            "Delicate conduct among the powerful; courtesy disarms.",
            "Tenderness with respect; mind the difference in tempers.",
            "Move among superiors with tact; merit will be seen.",
            "Tread carefully; avoid reckless strain.",
            "Deal cautiously with stronger parties.",
            "Good manners and inner truth make the dangerous path safe.",
        ],
        lines: [
            ("Simple conduct: progress without blame.", "Go your own modest way, free of entanglement."),
            ("Treading a smooth, level course: perseverance brings good fortune.", "Quiet self-sufficiency avoids all snares."),
            ("A one-eyed man is able to see, a lame man is able to tread: the tiger bites.", "Overestimating your strength invites the bite."),
            ("He treads on the tail of the tiger: caution leads to good fortune.", "Danger handled with alert care succeeds."),
            ("Resolute conduct: perseverance with awareness of danger.", "Act firmly, knowing exactly what is at stake."),
            ("Look to your conduct and weigh the favorable signs.", "The path is complete; its fruits judge it."),
        ],
    },
    HexagramRecord {
        number: 11,
        id: "hex-11",
        name: "Tai",
        character: "泰",
        english: "Peace",
        upper: "kun",
        lower: "qian",
        judgment: "The small departs, the great approaches: good fortune and success.",
        image: "Heaven and earth unite: the ruler completes their courses and furthers the people.",
        meanings: [
            "Heaven and earth in communion; a flourishing season.",
            "Harmony flows; deepen what is already good.",
            "Cooperation opens every door; expand now.",
            "Balance of rest and activity keeps the bloom.",
            "Prosperity; share it to keep it circulating.",
            "Tend the peace like a garden; it is not self-sustaining.",
        ],
        lines: [
            ("When ribbon grass is pulled up, the sod comes with it: undertakings bring good fortune.", "One good beginning draws its kind along."),
            ("Bearing with the uncultured, crossing the river resolutely: one walks in the middle.", "Generous breadth holds the great time together."),
            ("No plain not followed by a slope; no going not followed by a return.", "Prosperity carries its ebb; stay inwardly free."),
            ("He flutters down, not boasting of his wealth.", "High and low meet each other in sincerity."),
            ("The sovereign gives his daughter in marriage: supreme good fortune.", "A humble union of the strong brings blessing."),
            ("The wall falls back into the moat: use no army now.", "The cycle turns; yield to it with dignity."),
        ],
    },
    HexagramRecord {
        number: 12,
        id: "hex-12",
        name: "Pi",
        character: "否",
        english: "Standstill",
        upper: "qian",
        lower: "kun",
        judgment: "Standstill: the great departs, the small approaches; the perseverance of the noble one is not furthered.",
        image: "Heaven and earth do not unite: the noble one falls back upon inner worth to escape the difficulties.",
        meanings: [
            "Estrangement and blockage; the channels are closed.",
            "Distance grows; do not force what will not meet.",
            "Advancement is barred; withdraw and keep integrity.",
            "Stagnation; gentle movement restores circulation.",
            "Hold back; the market of this hour is against you.",
            "Retire into your worth; refuse rewards that compromise.",
        ],
        lines: [
            ("When ribbon grass is pulled up, the sod comes with it: perseverance brings good fortune.", "Withdraw together with your kind, intact."),
            ("They bear and endure: this means good fortune for inferior people.", "Endure the standstill without joining it."),
            ("They bear shame.", "The unworthy falter of themselves; wait."),
            ("He who acts at the command of the highest remains without blame.", "Move only on a true calling, not ambition."),
            ("Standstill is giving way: what if it should fail, what if it should fail?", "Tie success to deep roots; stay vigilant."),
            ("The standstill comes to an end: first standstill, then good fortune.", "The blockage breaks for those who prepared."),
        ],
    },
    HexagramRecord {
        number: 13,
        id: "hex-13",
        name: "Tong Ren",
        character: "同人",
        english: "Fellowship",
        upper: "qian",
        lower: "li",
        judgment: "Fellowship with others in the open: success; it furthers to cross the great water.",
        image: "Heaven together with fire: the noble one organizes the clans and makes distinctions between things.",
        meanings: [
            "Open fellowship around a shared aim.",
            "Friendship is the root; let the bond be public and clear.",
            "Team undertakings prosper; organize by strengths.",
            "Shared activity heals; avoid solitary brooding.",
            "Joint ventures conducted in the open succeed.",
            "Unite on universal grounds, not private cliques.",
        ],
        lines: [
            ("Fellowship at the gate: no blame.", "Union begins openly, without secrets."),
            ("Fellowship in the clan: humiliation.", "Faction breeds exclusion; widen the circle."),
            ("He hides weapons in the thicket: for three years he does not rise up.", "Mistrust paralyzes the common cause."),
            ("He climbs up on his wall; he cannot attack: good fortune.", "The quarrel cannot proceed; reconciliation nears."),
            ("Those bound in fellowship first weep, but afterward they laugh.", "Separation is outlasted by the true bond."),
            ("Fellowship in the meadow: no remorse.", "A modest, local union; warm but not yet universal."),
        ],
    },
    HexagramRecord {
        number: 14,
        id: "hex-14",
        name: "Da You",
        character: "大有",
        english: "Possession in Great Measure",
        upper: "li",
        lower: "qian",
        judgment: "Possession in great measure: supreme success.",
        image: "Fire in heaven above: the noble one curbs evil and furthers good.",
        meanings: [
            "Abundance with clarity; strength shining mildly.",
            "Generosity of spirit draws devotion.",
            "Great resources at hand; administer them graciously.",
            "A strong constitution; do not squander it.",
            "Wealth grows when handled with modest clarity.",
            "Possess as a steward, not an owner.",
        ],
        lines: [
            ("No relationship with what is harmful: no blame if one remains conscious of difficulty.", "Wealth still untested; stay austere."),
            ("A big wagon for loading: one may undertake something.", "Capacity and helpers equal to the task."),
            ("A prince offers it to the Son of Heaven; a petty man cannot do this.", "Put abundance at the service of the whole."),
            ("He makes a difference between himself and his neighbor: no blame.", "Do not compete in display; keep your measure."),
            ("He whose truth is accessible, yet dignified, has good fortune.", "Sincerity with dignity holds envy at bay."),
            ("He is blessed by heaven: nothing that does not further.", "Grace crowns the modest possessor."),
        ],
    },
    HexagramRecord {
        number: 15,
        id: "hex-15",
        name: "Qian",
        character: "謙",
        english: "Modesty",
        upper: "kun",
        lower: "gen",
        judgment: "Modesty creates success; the noble one carries things through.",
        image: "Within the earth, a mountain: the noble one equalizes the extremes.",
        meanings: [
            "A mountain hidden in earth: greatness carried low.",
            "Unassuming warmth wins lasting affection.",
            "Let the work speak; credit finds the modest.",
            "Moderation in every regimen preserves.",
            "Balance surplus and lack; level, do not hoard.",
            "Lower yourself and you will be raised.",
        ],
        lines: [
            ("A noble one modest about his modesty may cross the great water.", "Double humility makes the hardest crossing light."),
            ("Modesty that comes to expression: perseverance brings good fortune.", "Inner worth sounds of itself; let it."),
            ("A noble one of modesty and merit carries things to conclusion.", "Fame without arrogance completes the work."),
            ("Nothing that would not further modesty in movement.", "Humility is active, not timid; keep moving."),
            ("No boasting of wealth before the neighbor: it furthers to attack with vigor.", "Even the modest must sometimes act sharply."),
            ("It furthers to set armies marching against one's own city.", "Begin discipline with yourself and your own."),
        ],
    },
    HexagramRecord {
        number: 16,
        id: "hex-16",
        name: "Yu",
        character: "豫",
        english: "Enthusiasm",
        upper: "zhen",
        lower: "kun",
        judgment: "Enthusiasm: it furthers to install helpers and to set armies marching.",
        image: "Thunder comes resounding out of the earth: the ancient kings made music to honor merit.",
        meanings: [
            "Movement along the line of least resistance; the time carries.",
            "Joy is contagious; share it honestly, not giddily.",
            "Inspire others; momentum does the heavy lifting.",
            "Lift the spirit and the body follows; beware excess.",
            "Ride the favorable current, but keep your head.",
            "Lead by enthusiasm tuned to the hearts of the many.",
        ],
        lines: [
            ("Enthusiasm that expresses itself brings misfortune.", "Boasting of favor squanders it."),
            ("Firm as a rock, not a whole day: perseverance brings good fortune.", "See the seeds early; leave in time."),
            ("Enthusiasm that looks upward creates remorse; hesitation does also.", "Neither fawn nor dither; decide."),
            ("The source of enthusiasm: he achieves great things; doubt not.", "Confidence gathers friends like a hair clasp."),
            ("Persistently ill, and still does not die.", "Constant pressure, oddly, keeps you alive; endure."),
            ("Deluded enthusiasm: if one changes after completion, there is no blame.", "Sober up from the intoxication; it is not too late."),
        ],
    },
    HexagramRecord {
        number: 17,
        id: "hex-17",
        name: "Sui",
        character: "隨",
        english: "Following",
        upper: "dui",
        lower: "zhen",
        judgment: "Following has supreme success; perseverance furthers, no blame.",
        image: "Thunder in the middle of the lake: the noble one goes indoors at nightfall for rest.",
        meanings: [
            "Adapt to the time; lead by knowing when to follow.",
            "Win the heart by serving it, not by insisting.",
            "Fit yourself to circumstances and others will fit to you.",
            "Follow the body's rhythms; rest when rest is due.",
            "Go with the current trend, but only on honest terms.",
            "Only one who knows how to follow can command a following.",
        ],
        lines: [
            ("The standard is changing: going out of the door in company produces deeds.", "Open yourself to new views without losing your own."),
            ("If one clings to the little boy, one loses the strong man.", "Choose your attachments; you cannot keep both."),
            ("If one clings to the strong man, one loses the little boy.", "The higher tie costs the easy one; accept the cost."),
            ("Following creates success, but going one's own way with sincerity brings clarity.", "Beware followers who flatter; stay true."),
            ("Sincere in the good: good fortune.", "Follow what is excellent wherever it leads."),
            ("He meets with firm allegiance and is still further bound.", "Devotion so complete it binds even the departed sage."),
        ],
    },
    HexagramRecord {
        number: 18,
        id: "hex-18",
        name: "Gu",
        character: "蠱",
        english: "Work on What Has Been Spoiled",
        upper: "gen",
        lower: "xun",
        judgment: "Work on what has been spoiled has supreme success; before the starting point, three days, after it, three days.",
        image: "The wind blows low on the mountain: the noble one stirs up the people and strengthens their spirit.",
        meanings: [
            "Decay invites repair; what was spoiled can be mended.",
            "Old wounds in the bond need honest tending.",
            "Inherited disorder is your task now; reform it.",
            "Neglect has accumulated; begin the cure deliberately.",
            "Untangle mismanaged affairs before new ventures.",
            "Deliberate before the cut, persist after it.",
        ],
        lines: [
            ("Setting right what has been spoiled by the father: danger, but no blame in the end.", "Gentle correction of an inherited fault."),
            ("Setting right what has been spoiled by the mother: one must not be too persevering.", "Reform with tenderness, not rigor."),
            ("Setting right what has been spoiled by the father: a little remorse, no great blame.", "Slightly too forceful, still better than idle."),
            ("Tolerating what has been spoiled by the father: going on brings humiliation.", "Condoning decay lets it spread."),
            ("Setting right what has been spoiled by the father: one meets with praise.", "Reform with able helpers earns recognition."),
            ("He does not serve kings and princes; he sets himself higher goals.", "Withdraw from affairs to work on what lasts."),
        ],
    },
    HexagramRecord {
        number: 19,
        id: "hex-19",
        name: "Lin",
        character: "臨",
        english: "Approach",
        upper: "kun",
        lower: "dui",
        judgment: "Approach has supreme success; when the eighth month comes, there will be misfortune.",
        image: "The earth above the lake: the noble one is inexhaustible in teaching and sustaining the people.",
        meanings: [
            "A rising tide of good influence; greatness draws near.",
            "Warmth approaches; answer it while the season lasts.",
            "Superiors are receptive; advance your good ideas now.",
            "Improvement is underway; reinforce it before it peaks.",
            "A growth phase; invest early, remembering every spring ends.",
            "Use the favorable time fully, and provide for its turning.",
        ],
        lines: [
            ("Joint approach: perseverance brings good fortune.", "Advance together with the rising current."),
            ("Joint approach: everything furthers.", "The momentum is real; no anxious hedging needed."),
            ("Comfortable approach: if one is induced to grieve over it, one becomes free of blame.", "Ease breeds carelessness; catch it early."),
            ("Complete approach: no blame.", "Open-minded welcome of the able."),
            ("Wise approach: this is right for a great prince.", "Attract the capable and let them work."),
            ("Greathearted approach: good fortune, no blame.", "A generous return to help those still climbing."),
        ],
    },
    HexagramRecord {
        number: 20,
        id: "hex-20",
        name: "Guan",
        character: "觀",
        english: "Contemplation",
        upper: "xun",
        lower: "kun",
        judgment: "Contemplation: the ablution has been made, but not yet the offering; full of trust they look up to him.",
        image: "The wind blows over the earth: the kings of old visited the regions to contemplate and instruct the people.",
        meanings: [
            "A vantage point; survey before you act.",
            "Observe the other's way of being before judging it.",
            "Step back and study the whole field; decisions come later.",
            "Watch your patterns; insight precedes cure.",
            "Review the books before committing anything new.",
            "What you contemplate with reverence will instruct you.",
        ],
        lines: [
            ("Boylike contemplation: for an inferior, no blame; for the noble one, humiliation.", "Shallow looking no longer suits your station."),
            ("Contemplation through the crack of the door.", "A narrow, private view; widen it before concluding."),
            ("Contemplation of my life decides the choice between advance and retreat.", "Self-examination is the compass now."),
            ("Contemplation of the light of the kingdom: it furthers to exert influence as a guest.", "Study the center of things from an honored post."),
            ("Contemplation of my life: the noble one is without blame.", "Judge yourself by your effect on others."),
            ("Contemplation of his life: the noble one is without blame.", "Looking beyond the self, released from it."),
        ],
    },
    HexagramRecord {
        number: 21,
        id: "hex-21",
        name: "Shi He",
        character: "噬嗑",
        english: "Biting Through",
        upper: "li",
        lower: "zhen",
        judgment: "Biting through has success; it is favorable to let justice be administered.",
        image: "Thunder and lightning: the kings of old made firm the laws through clearly defined penalties.",
        meanings: [
            "An obstacle must be bitten through; decisiveness with clarity.",
            "Name the obstruction between you; vagueness feeds it.",
            "Confront the blocking problem directly and lawfully.",
            "Treat the acute trouble now; do not merely soothe it.",
            "Enforce the agreement; recover what is owed openly.",
            "Energetic, just intervention clears the way.",
        ],
        lines: [
            ("His feet are fastened in the stocks, so that his toes disappear.", "A first offense checked early; a mild lesson."),
            ("Bites through tender meat, so that his nose disappears.", "Easy judgment breeds excess zeal; no great harm."),
            ("Bites on old dried meat and strikes on something poisonous.", "Old cases carry venom; slight humiliation, no blame."),
            ("Bites on dried gristly meat, receives metal arrows.", "A hard case; stay firm as metal and upright."),
            ("Bites on dried lean meat, receives yellow gold.", "Judge with impartial mildness and full awareness of risk."),
            ("His neck is fastened in the wooden cangue, so that his ears disappear.", "Deaf to every warning; obstinacy completes the fall."),
        ],
    },
    HexagramRecord {
        number: 22,
        id: "hex-22",
        name: "Bi",
        character: "賁",
        english: "Grace",
        upper: "gen",
        lower: "li",
        judgment: "Grace has success; in small matters it is favorable to undertake something.",
        image: "Fire at the foot of the mountain: the noble one clears up current affairs but dares not decide great matters so.",
        meanings: [
            "Beautiful form adorns; it does not decide.",
            "Charm delights, substance endures; tell them apart.",
            "Presentation polishes the work; it cannot replace it.",
            "Cosmetic fixes soothe; the root wants plainer care.",
            "Pleasing appearances sell small things only.",
            "Enjoy ornament, and keep the essential plain.",
        ],
        lines: [
            ("He lends grace to his toes, leaves the carriage, and walks.", "Honest effort over borrowed show."),
            ("Lends grace to the beard on his chin.", "Form follows substance; do not groom the accessory."),
            ("Graceful and moist: constant perseverance brings good fortune.", "Charmed ease must not lapse into indolence."),
            ("Grace or simplicity? A white horse comes as if on wings.", "Plain sincerity proves the truer suitor."),
            ("Grace in hills and gardens: the roll of silk is meager and small.", "Modest offerings from the heart suffice."),
            ("Simple grace: no blame.", "Ornament perfected discards itself."),
        ],
    },
    HexagramRecord {
        number: 23,
        id: "hex-23",
        name: "Bo",
        character: "剝",
        english: "Splitting Apart",
        upper: "gen",
        lower: "kun",
        judgment: "Splitting apart: it does not further to go anywhere.",
        image: "The mountain rests on the earth: those above secure their position only by generosity below.",
        meanings: [
            "Erosion from beneath; the structure is being undermined.",
            "Quiet withdrawal is kinder than collapse.",
            "Do not launch anything; hold what integrity remains.",
            "Decline asks for rest and conservation, not exertion.",
            "Protect the principal; this is no time for exposure.",
            "Submit to the bad time and wait; it consumes itself.",
        ],
        lines: [
            ("The leg of the bed is split: the perseverance of those below is destroyed.", "Slander undermines the base; no ground to stand on."),
            ("The bed is split at the edge.", "The erosion climbs nearer; adapt, do not argue."),
            ("He splits with them: no blame.", "Break with the destroyers despite your place among them."),
            ("The bed is split up to the skin: misfortune.", "The harm reaches the person; disaster is direct."),
            ("A shoal of fishes: favor comes through the court ladies.", "The hostile current turns and asks guidance."),
            ("There is a large fruit still uneaten.", "One seed survives the ruin; from it the new rises."),
        ],
    },
    HexagramRecord {
        number: 24,
        id: "hex-24",
        name: "Fu",
        character: "復",
        english: "Return",
        upper: "kun",
        lower: "zhen",
        judgment: "Return has success; friends come without blame; on the seventh day comes return.",
        image: "Thunder within the earth: the kings of old closed the passes at the solstice to let the new light rest.",
        meanings: [
            "The turning point: light re-enters after the dark.",
            "An estrangement softens; the way back is open.",
            "A recovery begins; nurture it gently, do not rush it.",
            "Convalescence; protect the returning strength.",
            "The cycle turns upward; re-enter gradually.",
            "Let the new beginning grow at its own small pace.",
        ],
        lines: [
            ("Return from a short distance: no remorse, great good fortune.", "Turn back at the first step astray."),
            ("Quiet return: good fortune.", "Humility makes the turning easy."),
            ("Repeated return: danger, but no blame.", "Wavering back and forth; wearying, not fatal."),
            ("Walking in the midst of others, one returns alone.", "Leave the crowd when conscience calls."),
            ("Noblehearted return: no remorse.", "Admit the fault plainly; renewal follows."),
            ("Missing the return: misfortune for ten years.", "The moment scorned does not come again soon."),
        ],
    },
    HexagramRecord {
        number: 25,
        id: "hex-25",
        name: "Wu Wang",
        character: "無妄",
        english: "Innocence",
        upper: "qian",
        lower: "zhen",
        judgment: "Innocence: supreme success; if someone is not as he should be, it does not further him to undertake anything.",
        image: "Under heaven thunder rolls: the kings of old fostered all beings in accord with the time.",
        meanings: [
            "Unplanned naturalness; act from the true impulse only.",
            "Love without calculation; schemes poison it.",
            "Do the work for its own sake; contrived moves fail.",
            "An unexpected ailment passes if not overtreated.",
            "Honest dealings prosper; speculation miscarries.",
            "Stay innocent of ulterior designs and heaven helps.",
        ],
        lines: [
            ("Innocent behavior brings good fortune.", "The first impulse of the heart is trustworthy."),
            ("If one does not count on the harvest while plowing, it furthers to undertake something.", "Work without eyeing the reward."),
            ("Undeserved misfortune: the wandering ox is a gain to the passer-by.", "Loss without fault; bear it lightly."),
            ("He who can be persevering remains without blame.", "Hold to your nature; it cannot be stolen."),
            ("Use no medicine for an illness incurred through no fault of your own.", "Let the disturbance pass of itself."),
            ("Innocent action brings misfortune when the time is against it.", "Even the pure must wait; act not now."),
        ],
    },
    HexagramRecord {
        number: 26,
        id: "hex-26",
        name: "Da Chu",
        character: "大畜",
        english: "The Taming Power of the Great",
        upper: "gen",
        lower: "qian",
        judgment: "The taming power of the great: perseverance furthers; not eating at home brings good fortune.",
        image: "Heaven within the mountain: the noble one acquaints himself with the words and deeds of the past.",
        meanings: [
            "Great energy held and stored; charged stillness.",
            "Restraint deepens desire into devotion.",
            "Accumulate skill and reputation; the gate opens soon.",
            "Banked strength; train steadily, discharge later.",
            "Store resources; daily renewal compounds them.",
            "Hold firm under tension; stored force moves mountains.",
        ],
        lines: [
            ("Danger is at hand: it furthers to desist.", "Blocked for now; keep your powder dry."),
            ("The axletrees are taken from the wagon.", "Halted outright; use the pause to prepare."),
            ("A good horse that follows others: practice chariot driving daily.", "The way opens; advance with trained companions."),
            ("The headboard of a young bull: great good fortune.", "Curb wildness before it has horns."),
            ("The tusk of a gelded boar: good fortune.", "Redirect the force at its root, not its edge."),
            ("One attains the way of heaven: success.", "The stored power is released; everything moves."),
        ],
    },
    HexagramRecord {
        number: 27,
        id: "hex-27",
        name: "Yi",
        character: "頤",
        english: "Nourishment",
        upper: "gen",
        lower: "zhen",
        judgment: "Nourishment: perseverance brings good fortune; pay heed to the providing of nourishment and to what a man seeks to fill his mouth with.",
        image: "At the foot of the mountain, thunder: the noble one is careful of his words and temperate in eating and drinking.",
        meanings: [
            "What you feed grows; mind every intake.",
            "Nourish each other's best, not each other's fears.",
            "Feed the skills that feed you; prune idle appetites.",
            "Diet, in food and in thought, decides this season.",
            "Fund what sustains; starve what merely consumes.",
            "Watch what goes in and what comes out of the mouth.",
        ],
        lines: [
            ("You let your magic tortoise go and look at me with the corners of your mouth drooping.", "Envy of others' fare wastes your own gift."),
            ("Deviating from the path to seek nourishment from the hill.", "Leaning on unearned support loses dignity."),
            ("Turning away from nourishment: do not act thus for ten years.", "Empty stimulation starves; break the habit."),
            ("Turning to the summit for nourishment, spying about with sharp eyes.", "Seeking helpers for a great task is no greed."),
            ("Turning away from the path: remain persevering, do not cross the great water.", "Aware of weakness, keep to small duties."),
            ("The source of nourishment: awareness of danger brings good fortune.", "Provider of many; heavy duty, great reward."),
        ],
    },
    HexagramRecord {
        number: 28,
        id: "hex-28",
        name: "Da Guo",
        character: "大過",
        english: "Preponderance of the Great",
        upper: "dui",
        lower: "xun",
        judgment: "The ridgepole sags to the breaking point; it furthers to have somewhere to go.",
        image: "The lake rises above the trees: the noble one stands alone without fear and renounces the world without sadness.",
        meanings: [
            "The load exceeds the beam; an extraordinary time.",
            "Intensity strains the bond; lighten it or lose it.",
            "Crisis asks for swift, exceptional measures.",
            "Overload warns; reduce strain before something gives.",
            "Leverage is dangerous now; deleverage deliberately.",
            "Act with exceptional resolve, without dramatics.",
        ],
        lines: [
            ("To spread white rushes underneath: no blame.", "Extraordinary care at the foundation."),
            ("A withered poplar puts forth shoots at the root.", "Unlikely renewal through a humble alliance."),
            ("The ridgepole sags to the breaking point: misfortune.", "Pressing on heedless of the strain brings collapse."),
            ("The ridgepole is braced: good fortune.", "Support accepted in time saves the structure."),
            ("A withered poplar puts forth flowers.", "A brilliant but fruitless show; no lasting issue."),
            ("One must go through the water: it goes over one's head.", "Sacrifice beyond strength; no blame, great grief."),
        ],
    },
    HexagramRecord {
        number: 29,
        id: "hex-29",
        name: "Kan",
        character: "坎",
        english: "The Abysmal",
        upper: "kan",
        lower: "kan",
        judgment: "The Abysmal repeated: if you are sincere, you have success in your heart, and whatever you do succeeds.",
        image: "Water flows on uninterruptedly: the noble one walks in lasting virtue and carries on the business of teaching.",
        meanings: [
            "Danger doubled; flow through it like water, filling each hollow.",
            "A trying passage; truthfulness is the only raft.",
            "Risk on every side; proceed by thorough, small steps.",
            "Deep strain; keep the heart steady and the habits simple.",
            "Treacherous waters; commit nothing you cannot lose.",
            "Be true within and keep moving; water never argues with the gorge.",
        ],
        lines: [
            ("Repetition of the Abysmal: one falls into the pit.", "Growing used to danger is the deepest danger."),
            ("The abyss is dangerous: strive to attain small things only.", "Do not climb out in one leap; gain footholds."),
            ("Every step, forward or back, leads into danger: wait.", "Entangled; do not force an exit, rest first."),
            ("A jug of wine, a bowl of rice: handed in through the window.", "In extremity, sincerity needs no ceremony."),
            ("The abyss is not filled to overflowing.", "Seek only the level of escape, no more."),
            ("Bound with cords and ropes, shut in between thorn-hedged walls.", "The way lost at the worst hour; a long penance."),
        ],
    },
    HexagramRecord {
        number: 30,
        id: "hex-30",
        name: "Li",
        character: "離",
        english: "The Clinging",
        upper: "li",
        lower: "li",
        judgment: "The Clinging: perseverance furthers; care of the cow brings good fortune.",
        image: "Brightness rises twice: the great one illumines the four quarters of the world.",
        meanings: [
            "Radiance that lives by what it clings to; tend your flame.",
            "Warmth needs fuel; feed the relationship its daily light.",
            "Visibility and clarity; shine on the work, not on yourself.",
            "Burning bright burns fuel; pace the fire.",
            "Brilliant opportunities; attach them to solid ground.",
            "Cling to what is luminous and nourish docility within.",
        ],
        lines: [
            ("The footprints run crisscross: seriousness at the start, no blame.", "Collect yourself before the day scatters you."),
            ("Yellow light: supreme good fortune.", "The middle way glows; neither glare nor gloom."),
            ("In the light of the setting sun, men either beat the pot and sing or loudly bewail.", "Transience seen; neither revel nor despair."),
            ("Its coming is sudden; it flames up, dies down, is thrown away.", "A blaze without roots consumes itself."),
            ("Tears in floods, sighing and lamenting: good fortune.", "A real turning of the heart, not mere mood."),
            ("The king uses him to march forth and chastise: he kills the leaders only.", "Correct the root evils, spare the misled."),
        ],
    },
    HexagramRecord {
        number: 31,
        id: "hex-31",
        name: "Xian",
        character: "咸",
        english: "Influence",
        upper: "dui",
        lower: "gen",
        judgment: "Influence: success; perseverance furthers; to take a maiden to wife brings good fortune.",
        image: "A lake on the mountain: the noble one encourages people to approach him by his readiness to receive them.",
        meanings: [
            "Mutual attraction; the still receives the joyous.",
            "Courtship in the true sense; woo and be wooed openly.",
            "Influence flows from receptive strength, not pressure.",
            "Sensitivity heightened; let impressions settle first.",
            "Attractive offers; test what attracts before committing.",
            "Keep the heart still so the right influence can enter.",
        ],
        lines: [
            ("The influence shows itself in the big toe.", "A first stirring; intention only, no motion yet."),
            ("The influence shows itself in the calves: tarrying brings good fortune.", "Do not run after the impulse; wait."),
            ("The influence shows itself in the thighs: to continue is humiliating.", "Running after every mood loses the center."),
            ("Perseverance brings good fortune; only what friends honor in thought follows.", "Influence the willing; coercion moves no heart."),
            ("The influence shows itself in the back of the neck.", "Firm will unshaken by moods; no remorse."),
            ("The influence shows itself in the jaws, cheeks, and tongue.", "Mere talk; the shallowest influence of all."),
        ],
    },
    HexagramRecord {
        number: 32,
        id: "hex-32",
        name: "Heng",
        character: "恆",
        english: "Duration",
        upper: "zhen",
        lower: "xun",
        judgment: "Duration: success, no blame; perseverance furthers; it furthers to have somewhere to go.",
        image: "Thunder and wind: the noble one stands firm and does not change direction.",
        meanings: [
            "Endurance as living movement, not standstill.",
            "A settled bond; renew it by constancy, not novelty.",
            "Stay the course; compounding works for the steadfast.",
            "Regular habits, long horizon; that is the cure.",
            "Long positions held with discipline mature well.",
            "Persevere in the right direction and renew daily.",
        ],
        lines: [
            ("Seeking duration too hastily brings misfortune.", "Depth cannot be demanded at the start."),
            ("Remorse disappears.", "Strength matched to the task at last."),
            ("He who does not give duration to his character meets disgrace.", "Moods invite insult; steady the inner line."),
            ("No game in the field.", "Persistent effort in the wrong place stays empty."),
            ("Giving duration to one's character through perseverance.", "Know whether your role is to follow or to lead."),
            ("Restlessness as an enduring condition brings misfortune.", "Chronic haste undoes everything it touches."),
        ],
    },
    HexagramRecord {
        number: 33,
        id: "hex-33",
        name: "Dun",
        character: "遯",
        english: "Retreat",
        upper: "qian",
        lower: "gen",
        judgment: "Retreat: success; in what is small, perseverance furthers.",
        image: "Mountain under heaven: the noble one keeps the inferior at a distance, not angrily but with reserve.",
        meanings: [
            "A dignified withdrawal while strength remains.",
            "Step back without coldness; distance can preserve affection.",
            "Disengage from a losing position on your own terms.",
            "Conserve energy; retreat from what depletes you.",
            "Take profits and reduce exposure; the tide is turning.",
            "Retreat is not flight; choose the moment and keep order.",
        ],
        lines: [
            ("At the tail in retreat: this is dangerous; do not undertake anything.", "Caught at the rear; stand still, invite nothing."),
            ("He holds him fast with yellow oxhide.", "A bond that cannot be torn; the strong is held by the right."),
            ("A halted retreat is nerve-wracking and dangerous.", "Entanglement delays you; keep dependents close, power away."),
            ("Voluntary retreat brings good fortune to the noble one, downfall to the inferior.", "Going in good form; only the superior can."),
            ("Friendly retreat: perseverance brings good fortune.", "Part amiably and unmistakably."),
            ("Cheerful retreat: everything serves to further.", "Inner freedom makes the leaving light."),
        ],
    },
    HexagramRecord {
        number: 34,
        id: "hex-34",
        name: "Da Zhuang",
        character: "大壯",
        english: "The Power of the Great",
        upper: "zhen",
        lower: "qian",
        judgment: "The power of the great: perseverance furthers.",
        image: "Thunder in heaven above: the noble one does not tread upon paths that do not accord with established order.",
        meanings: [
            "Great strength in motion; power joined to rightness.",
            "Strong feelings; let justice, not appetite, steer them.",
            "Momentum favors you; advance within the rules.",
            "Abundant force; injuries come from misuse, not lack.",
            "Expansion with discipline; do not ram the gate.",
            "True greatness is power that stays on the right path.",
        ],
        lines: [
            ("Power in the toes: continuing brings misfortune.", "Force from the lowest place; a premature push."),
            ("Perseverance brings good fortune.", "The gate yields; keep measure in mid-success."),
            ("The inferior man works through power; the noble one does not act thus.", "A goat butts a hedge and entangles its horns."),
            ("The hedge opens; there is no entanglement.", "Quiet, steady work removes the obstacle unseen."),
            ("Loses the goat with ease: no remorse.", "Drop the stubbornness; nothing butts back."),
            ("The goat butts against a hedge: it cannot go backward or forward.", "Deadlock from obstinacy; notice it, and fortune returns."),
        ],
    },
    HexagramRecord {
        number: 35,
        id: "hex-35",
        name: "Jin",
        character: "晉",
        english: "Progress",
        upper: "li",
        lower: "kun",
        judgment: "Progress: the powerful prince is honored with horses in large numbers and received three times in a single day.",
        image: "The sun rises over the earth: the noble one brightens his bright virtue.",
        meanings: [
            "Rapid, sunlit advance; recognition comes easily.",
            "Growing closeness in the open; nothing hidden prospers more.",
            "Promotion and visibility; rise by lifting others.",
            "Energy returns like morning light; use it cleanly.",
            "Favorable expansion; keep the accounts transparent.",
            "Advance brightly and keep your virtue brighter than your rank.",
        ],
        lines: [
            ("Progressing, but turned back: perseverance brings good fortune.", "Checked at the start; stay calm and generous."),
            ("Progressing, but in sorrow: great happiness comes from one's ancestress.", "Blocked from the contact you seek; gentleness reaches it."),
            ("All are in accord: remorse disappears.", "The many carry you; lean on the common will."),
            ("Progress like a hamster: perseverance brings danger.", "Hoarding in the dark cannot survive the light."),
            ("Remorse disappears: take not gain and loss to heart.", "Influence matters more than winnings now."),
            ("Making progress with the horns is permissible only for punishing one's own city.", "Aggressive means only for one's own faults."),
        ],
    },
    HexagramRecord {
        number: 36,
        id: "hex-36",
        name: "Ming Yi",
        character: "明夷",
        english: "Darkening of the Light",
        upper: "kun",
        lower: "li",
        judgment: "Darkening of the light: in adversity it furthers to be persevering.",
        image: "The light has sunk into the earth: the noble one lives with the great mass, veiling his brightness, yet still shining.",
        meanings: [
            "The light is wounded; guard it inwardly and show little.",
            "Protect tenderness from a harsh climate; privacy is shelter.",
            "A hostile environment; do your work, hide your brilliance.",
            "Draw inward; the flame survives by being banked.",
            "Keep reserves invisible; this is a season for discretion.",
            "Veil your light without letting it go out.",
        ],
        lines: [
            ("Darkening of the light during flight: he lowers his wings.", "Early escape costs comfort; accept the raised eyebrows."),
            ("The darkness wounds him in the left thigh: he gives aid with the strength of a horse.", "Hurt but mobile; save the others."),
            ("The light darkens during the hunt in the south: the great leader is captured.", "The chief evil falls; reform the rest slowly."),
            ("He penetrates the left side of the belly and leaves gate and courtyard.", "Seeing the rot within, one leaves before the break."),
            ("Darkening of the light as with Prince Ji: perseverance furthers.", "Invincible persistence under an unshakeable dark."),
            ("Not light but darkness: first he climbed up to heaven, then he plunged into the depths.", "The dark power destroys itself at its peak."),
        ],
    },
    HexagramRecord {
        number: 37,
        id: "hex-37",
        name: "Jia Ren",
        character: "家人",
        english: "The Family",
        upper: "xun",
        lower: "li",
        judgment: "The family: the perseverance of the woman furthers.",
        image: "Wind comes forth from fire: the noble one has substance in his words and duration in his way of life.",
        meanings: [
            "Order begins at the hearth and radiates outward.",
            "Clear roles and warm loyalty; the household thrives.",
            "Run the team like a healthy family; trust plus structure.",
            "Home habits set the constitution; tend them first.",
            "Household economy before outer ventures.",
            "Let words have substance and conduct have constancy.",
        ],
        lines: [
            ("Firm seclusion within the family: remorse disappears.", "Set the house rules early, before habits harden."),
            ("She should not follow her whims; she must attend within to the food.", "Quiet care at the center holds everything."),
            ("When tempers flare up in the family, too great severity brings remorse.", "Better strictness with regret than laxity without end."),
            ("She is the treasure of the house: great good fortune.", "Stewardship of the shared goods enriches all."),
            ("As a king he approaches his family: fear not.", "Authority through affection, not dread."),
            ("His work commands respect: in the end good fortune comes.", "The example of one upright person orders the whole."),
        ],
    },
    HexagramRecord {
        number: 38,
        id: "hex-38",
        name: "Kui",
        character: "睽",
        english: "Opposition",
        upper: "li",
        lower: "dui",
        judgment: "Opposition: in small matters, good fortune.",
        image: "Above, fire; below, the lake: amid all fellowship the noble one retains his individuality.",
        meanings: [
            "Divergence of natures; unity in great things is not possible now.",
            "Two fires, two directions; meet in the small and concrete.",
            "Misunderstandings abound; progress only in modest steps.",
            "Inner contradictions pull at you; reconcile them gently.",
            "Partners at cross purposes; transact small, verify much.",
            "Preserve individuality without hardening into enmity.",
        ],
        lines: [
            ("Remorse disappears: do not run after the lost horse, it returns of itself.", "Let the estranged come back on their own feet."),
            ("One meets his lord in a narrow street: no blame.", "An informal meeting where formal ways are blocked."),
            ("One sees the wagon dragged back, the oxen halted.", "Everything seems against you; the end sets it right."),
            ("Isolated through opposition, one meets a like-minded man.", "A companion in honesty lightens the danger."),
            ("Remorse disappears: the companion bites his way through the wrappings.", "Recognize the sincere ally under the disguise."),
            ("One sees one's companion as a pig covered with dirt: the tension dissolves.", "Mistrust invented the monster; rain clears the air."),
        ],
    },
    HexagramRecord {
        number: 39,
        id: "hex-39",
        name: "Jian",
        character: "蹇",
        english: "Obstruction",
        upper: "kan",
        lower: "gen",
        judgment: "Obstruction: the southwest furthers, the northeast does not; it furthers to see the great person.",
        image: "Water on the mountain: the noble one turns his attention to himself and molds his character.",
        meanings: [
            "A blocked road; the obstacle points back at the traveler.",
            "External difficulty tests the bond; face it side by side.",
            "Do not charge the wall; regroup, seek counsel, go around.",
            "Strain from pushing; pause and rebuild the base.",
            "Frozen conditions; liquidity and patience over heroics.",
            "Turn inward, join with friends, and wait for the thaw.",
        ],
        lines: [
            ("Going leads to obstructions, coming meets with praise.", "Wait for the right moment rather than walk into the wall."),
            ("The king's servant is beset by obstruction upon obstruction.", "Duty demands the hard road; no blame attaches."),
            ("Going leads to obstructions; hence he comes back.", "Return for the sake of those who depend on you."),
            ("Going leads to obstructions, coming leads to union.", "Gather trustworthy companions before the attempt."),
            ("In the midst of the greatest obstructions, friends come.", "Stand firm at the center; help is on the way."),
            ("Going leads to obstructions, coming leads to great good fortune.", "Even the departed sage turns back for this work."),
        ],
    },
    HexagramRecord {
        number: 40,
        id: "hex-40",
        name: "Jie",
        character: "解",
        english: "Deliverance",
        upper: "zhen",
        lower: "kan",
        judgment: "Deliverance: the southwest furthers; if there is still something to do, hastening brings good fortune.",
        image: "Thunder and rain set in: the noble one pardons mistakes and forgives misdeeds.",
        meanings: [
            "The storm breaks the tension; release and forgive.",
            "After the quarrel, clear the air quickly and fully.",
            "The crisis passes; tie off loose ends and move on.",
            "Relief arrives; complete the cure, do not dwell.",
            "Obligations dissolve; settle promptly and simplify.",
            "Deliverance wants a clean, swift return to the ordinary.",
        ],
        lines: [
            ("Without blame.", "The hindrance is gone; recover in silence."),
            ("One kills three foxes in the field and receives a yellow arrow.", "Remove the flatterers with straight means."),
            ("If a man carries a burden on his back and rides in a carriage, he invites robbers.", "Comfort above one's station attracts attack."),
            ("Deliver yourself from your great toe.", "Drop the unworthy hanger-on; true friends then come."),
            ("If only the noble one can deliver himself, inferior people withdraw of themselves.", "Inner resolve must be visible to be believed."),
            ("The prince shoots at a hawk on a high wall: he kills it.", "Remove the last, highest obstacle decisively."),
        ],
    },
    HexagramRecord {
        number: 41,
        id: "hex-41",
        name: "Sun",
        character: "損",
        english: "Decrease",
        upper: "gen",
        lower: "dui",
        judgment: "Decrease combined with sincerity brings supreme good fortune; two small bowls suffice for the sacrifice.",
        image: "The lake at the foot of the mountain: the noble one controls his anger and restrains his instincts.",
        meanings: [
            "Lessening below strengthens above; simplicity is the gain.",
            "Fewer demands, truer giving; the bond grows lighter and stronger.",
            "Cut costs and pretensions; the lean plan wins.",
            "Reduce excess; the cure is subtraction.",
            "Austerity now funds abundance later.",
            "Give what is asked with sincerity; plain offerings count.",
        ],
        lines: [
            ("Going quickly when one's tasks are finished: no blame.", "Help without self-importance, then leave."),
            ("Perseverance furthers; one furthers others without decreasing oneself.", "Serve with dignity; self-ruin serves no one."),
            ("When three people journey together, their number decreases by one.", "Two is company; a third divides."),
            ("If a man decreases his faults, it makes the other hasten to rejoice.", "Lower the barrier and help arrives."),
            ("Someone does indeed increase him: ten pairs of tortoises cannot oppose it.", "Destined favor; no resistance avails."),
            ("If one is increased without depriving others, there is no blame.", "Gain that enriches everyone under you."),
        ],
    },
    HexagramRecord {
        number: 42,
        id: "hex-42",
        name: "Yi",
        character: "益",
        english: "Increase",
        upper: "xun",
        lower: "zhen",
        judgment: "Increase: it furthers to undertake something; it furthers to cross the great water.",
        image: "Wind and thunder: the noble one sees good and imitates it, has faults and corrects them.",
        meanings: [
            "Those above pour into those below; a generous hour.",
            "Giving freely multiplies the affection given.",
            "Expand boldly; sacrifice from the top funds the base.",
            "Strength increases; build habits that keep it.",
            "Invest in growth while the wind is behind you.",
            "Use the time of increase fully; such days do not linger.",
        ],
        lines: [
            ("It furthers to accomplish great deeds: supreme good fortune.", "Borrowed strength obliges great, selfless work."),
            ("Someone does indeed increase him: constant perseverance brings good fortune.", "Favor flows in; keep your own line true."),
            ("One is enriched through unfortunate events: no blame.", "Even mishap turns to gain for the sincere."),
            ("Walk in the middle and report to the prince.", "Be the fair broker in great removals."),
            ("If in truth you have a kind heart, ask not: supreme good fortune.", "Kindness recognized without being advertised."),
            ("He brings increase to no one: someone even strikes him.", "Taking without giving collapses at last."),
        ],
    },
    HexagramRecord {
        number: 43,
        id: "hex-43",
        name: "Guai",
        character: "夬",
        english: "Breakthrough",
        upper: "dui",
        lower: "qian",
        judgment: "Breakthrough: one must resolutely make the matter known at the court of the king; it does not further to resort to arms.",
        image: "The lake has risen up to heaven: the noble one dispenses riches downward and refrains from resting on his virtue.",
        meanings: [
            "The last obstruction must be openly, cleanly removed.",
            "Name the grievance aloud; resentment in silence festers.",
            "Expose the problem to daylight; do not knife it in the dark.",
            "A decisive clearing; finish the course, do not taper early.",
            "Distribute gains; a hoard at the top invites the flood.",
            "Be resolute without violence, firm without hatred.",
        ],
        lines: [
            ("Mighty in the forward-striding toes: going and not being equal to the task.", "Strength announced before it exists."),
            ("A cry of alarm: arms at evening and fear nothing.", "Prepared vigilance dissolves the ambush."),
            ("To be powerful in the cheekbones brings misfortune.", "The face betrays the fight too soon; walk alone in rain."),
            ("There is no skin on his thighs, yet walking comes hard.", "Obstinacy where listening would free the step."),
            ("In dealing with weeds, firm resolution is necessary.", "Pull the root mid-path, again and again, without anger."),
            ("No cry: in the end misfortune comes.", "The evil thought finished off too soon returns."),
        ],
    },
    HexagramRecord {
        number: 44,
        id: "hex-44",
        name: "Gou",
        character: "姤",
        english: "Coming to Meet",
        upper: "qian",
        lower: "xun",
        judgment: "Coming to meet: the maiden is powerful; one should not marry such a maiden.",
        image: "Under heaven, wind: the prince disseminates his commands and proclaims them to the four quarters.",
        meanings: [
            "A seemingly harmless influence enters from below; weigh it.",
            "A sudden attraction; test its character before its charm.",
            "An appealing proposal conceals growing claims; read the fine print.",
            "A small symptom returns; check it before it settles in.",
            "Easy money approaches; it rarely leaves alone.",
            "Meet what comes halfway, but on your own conditions.",
        ],
        lines: [
            ("It must be checked with a brake of bronze.", "Stop the creeping influence at the first inch."),
            ("There is a fish in the tank: no blame.", "Contain the inferior gently; do not parade it."),
            ("There is no skin on his thighs, and walking comes hard.", "Tempted and halted; awareness keeps you from worse."),
            ("No fish in the tank: this leads to misfortune.", "Tolerance withheld too long; the people fall away."),
            ("A melon covered with willow leaves: hidden lines.", "Protect the good beneath you without display."),
            ("He comes to meet with his horns: humiliation, no blame.", "Aloof pride at the end; it isolates, but it is honest."),
        ],
    },
    HexagramRecord {
        number: 45,
        id: "hex-45",
        name: "Cui",
        character: "萃",
        english: "Gathering Together",
        upper: "dui",
        lower: "kun",
        judgment: "Gathering together: success; the king approaches his temple, and it furthers to see the great person.",
        image: "The lake rises above the earth: the noble one renews his weapons to meet the unforeseen.",
        meanings: [
            "The many collect around a center; great works become possible.",
            "Family and community knit together; celebrate the center.",
            "Assemble the team around a real leader and a real aim.",
            "Collected strength; guard against the friction of crowds.",
            "Pooled capital prospers under clear stewardship.",
            "Gather with reverence, and keep watch where many gather.",
        ],
        lines: [
            ("If you are sincere but not to the end, there is confusion and gathering.", "Waver and the crowd wavers with you; one grasp of the hand."),
            ("Letting oneself be drawn brings good fortune.", "Yield to the pull of your own kind."),
            ("Gathering together amid sighs: a small humiliation, no blame.", "On the outside of the circle; ally with the center anyway."),
            ("Great good fortune, no blame.", "Gathering for the common cause, not for oneself."),
            ("If in gathering together one has position, there is no blame.", "Quiet virtue converts those who came from habit."),
            ("Lamenting and sighing, floods of tears: no blame.", "Misunderstood goodwill; grief itself opens the way."),
        ],
    },
    HexagramRecord {
        number: 46,
        id: "hex-46",
        name: "Sheng",
        character: "升",
        english: "Pushing Upward",
        upper: "kun",
        lower: "xun",
        judgment: "Pushing upward has supreme success; one must see the great person; fear not, departure toward the south brings good fortune.",
        image: "Within the earth, wood grows: the noble one heaps up small things to achieve something high and great.",
        meanings: [
            "Growth like a tree through soil: effortful, invisible, sure.",
            "Devotion grows by small daily proofs.",
            "Rise step by step through real work; no leaps required.",
            "Gradual strengthening; trust the slow curve.",
            "Compounding of modest gains; keep adding.",
            "Push upward with will and adaptability both.",
        ],
        lines: [
            ("Pushing upward that meets with confidence brings great good fortune.", "The lowest rung welcomed from above."),
            ("If one is sincere, it furthers to bring even a small offering.", "Plain ability excuses plain manners."),
            ("One pushes upward into an empty city.", "Unresisted advance; enjoy it, do not trust it blindly."),
            ("The king offers him Mount Qi: good fortune, no blame.", "Admitted among the honored; a lasting place."),
            ("Perseverance brings good fortune: one pushes upward by steps.", "Skip nothing; each stair carries the next."),
            ("Pushing upward in darkness: unremitting perseverance alone profits.", "Blind climbing; stop, or make every step deliberate."),
        ],
    },
    HexagramRecord {
        number: 47,
        id: "hex-47",
        name: "Kun",
        character: "困",
        english: "Oppression",
        upper: "dui",
        lower: "kan",
        judgment: "Oppression: success through perseverance for the truly great; when one has something to say, it is not believed.",
        image: "There is no water in the lake: the noble one stakes his life on following his will.",
        meanings: [
            "Exhaustion and constraint; greatness is proven here.",
            "Hard times test the bond; words convince less than steadiness.",
            "Resources cut off; preserve purpose, spend no breath arguing.",
            "Depletion; husband the remaining strength carefully.",
            "A drained season; endure, do not chase what is gone.",
            "Be cheerful in adversity and silent where talk is wasted.",
        ],
        lines: [
            ("One sits oppressed under a bare tree and strays into a gloomy valley.", "Yielding to gloom deepens it; three years lost."),
            ("One is oppressed while at meat and drink.", "Outer plenty, inner weariness; offer, do not grasp."),
            ("He leans on thorns and thistles and does not see his wife.", "Restless grasping at what cannot hold; grave danger."),
            ("He comes very quietly, oppressed in a golden carriage.", "Comfort hampers the rescue; humiliation, then the end is reached."),
            ("His nose and feet are cut off; oppression from the man with the purple knee bands.", "Blocked above and below; joy returns slowly, keep offering."),
            ("He is oppressed by creeping vines: remorse, and with it the turn.", "The bonds are rotten; the moment you move, they break."),
        ],
    },
    HexagramRecord {
        number: 48,
        id: "hex-48",
        name: "Jing",
        character: "井",
        english: "The Well",
        upper: "kan",
        lower: "xun",
        judgment: "The well: the town may be changed, but the well cannot be changed; it neither decreases nor increases.",
        image: "Water over wood: the noble one encourages the people at their work and exhorts them to help one another.",
        meanings: [
            "The inexhaustible source beneath changing forms.",
            "The deep reserves of a bond; draw from them, maintain them.",
            "Structure may change, the craft remains; tend the fundamentals.",
            "Return to the source practices that always restore you.",
            "Maintain the producing asset; the bucket matters too.",
            "Keep the well clean and the rope whole; then all may drink.",
        ],
        lines: [
            ("One does not drink the mud of the well: no animals come to an old well.", "A neglected source attracts no one; renew it."),
            ("At the wellhole one shoots fishes: the jug is broken and leaks.", "Good capacities trickling away among the trivial."),
            ("The well is cleaned, but no one drinks from it.", "Ability ready and unused; the wise grieve at the waste."),
            ("The well is being lined: no blame.", "A pause for repair serves every future draw."),
            ("In the well there is a clear, cold spring from which one can drink.", "A living source exists; it must be drawn upon."),
            ("One draws from the well without hindrance: supreme good fortune.", "The well open to all, dependable and unexhausted."),
        ],
    },
    HexagramRecord {
        number: 49,
        id: "hex-49",
        name: "Ge",
        character: "革",
        english: "Revolution",
        upper: "dui",
        lower: "li",
        judgment: "Revolution: on your own day you are believed; supreme success, remorse disappears.",
        image: "Fire in the lake: the noble one sets the calendar in order and makes the seasons clear.",
        meanings: [
            "Molting time; the old form must be shed deliberately.",
            "The relationship must change its skin or suffocate.",
            "Reform is due; time it well and state it plainly.",
            "A change of regimen, radical but considered.",
            "Restructure; gradual patching no longer serves.",
            "Revolve only when you must, and then completely.",
        ],
        lines: [
            ("Wrapped in the hide of a yellow cow.", "Restrain yourself; the hour of change is not yet."),
            ("When one's own day comes, one may create revolution.", "Prepared, announced, supported; now act."),
            ("Starting brings misfortune, perseverance brings danger; when talk of revolution has gone three times round, one may commit.", "Neither haste nor hesitation; thrice-weighed, then done."),
            ("Remorse disappears; men believe him.", "Change grounded in right needs no force."),
            ("The great man changes like a tiger: even before he questions the oracle he is believed.", "The new order shows its stripes at once."),
            ("The noble one changes like a panther; the inferior molts in the face.", "After the great change, refine the details; demand no more."),
        ],
    },
    HexagramRecord {
        number: 50,
        id: "hex-50",
        name: "Ding",
        character: "鼎",
        english: "The Cauldron",
        upper: "li",
        lower: "xun",
        judgment: "The cauldron: supreme good fortune, success.",
        image: "Fire over wood: the noble one consolidates his fate by making his position correct.",
        meanings: [
            "The vessel of culture; transformation through nourishment.",
            "A shared vessel; what you cook together feeds the bond.",
            "Institution-building; give talent a vessel and a flame.",
            "Proper nourishment transforms; refine the daily fare.",
            "Invest in the durable vessel, not the passing meal.",
            "Offer the finest of what you make to what is highest.",
        ],
        lines: [
            ("A cauldron with legs upturned: it furthers removal of stagnating stuff.", "Invert the vessel to empty the spoiled."),
            ("There is food in the cauldron: my comrades are envious, but they cannot harm me.", "Real substance is proof against envy."),
            ("The handle of the cauldron is altered: the fat of the pheasant is not eaten.", "Merit unrecognized for now; rain comes at last."),
            ("The legs of the cauldron are broken: the prince's meal is spilled.", "A task beyond one's strength disgraces all."),
            ("The cauldron has yellow handles, golden carrying rings.", "Approachable and strong; the vessel serves."),
            ("The cauldron has rings of jade: great good fortune.", "Firm and soft perfectly joined; counsel like jade."),
        ],
    },
    HexagramRecord {
        number: 51,
        id: "hex-51",
        name: "Zhen",
        character: "震",
        english: "The Arousing",
        upper: "zhen",
        lower: "zhen",
        judgment: "Shock brings success; the thunder terrifies for a hundred miles, and he does not let fall the sacrificial spoon.",
        image: "Thunder repeated: the noble one in fear and trembling sets his life in order and examines himself.",
        meanings: [
            "Shock upon shock; the tremor that wakes and sorts.",
            "A jolt tests the bond; the steady hand keeps the cup.",
            "Upheaval; keep performing the essential duties calmly.",
            "Acute fright passes; use it to examine your habits.",
            "Turbulence; do not trade in the middle of the thunderclap.",
            "Let reverent fear order your life rather than scatter it.",
        ],
        lines: [
            ("Shock comes: oh, oh! Then follow laughing words: ha, ha!", "The fright that ends in cheer for the prepared."),
            ("Shock comes bringing danger: do not go in pursuit, on the seventh day you will get your treasures back.", "Yield to the wave; the loss returns."),
            ("Shock comes and makes one distraught: act, and remain free of misfortune.", "Let the jolt move you to action, not paralysis."),
            ("Shock is mired.", "The tremor lands in mud; no resonance, no lesson."),
            ("Shock goes hither and thither: nothing at all is lost, yet there are things to be done.", "Stay in the center of the storm and keep working."),
            ("Shock brings ruin and terrified gazing around.", "Act before the quake reaches you; ignore the gossip."),
        ],
    },
    HexagramRecord {
        number: 52,
        id: "hex-52",
        name: "Gen",
        character: "艮",
        english: "Keeping Still",
        upper: "gen",
        lower: "gen",
        judgment: "Keeping still: keeping his back still so that he no longer feels his body; no blame.",
        image: "Mountains standing close together: the noble one does not permit his thoughts to go beyond his situation.",
        meanings: [
            "Stillness at the right time; the mountain does not deliberate.",
            "Quiet togetherness without restlessness or demand.",
            "Pause the campaign; consolidation is this quarter's work.",
            "Calm the back, calm the mind; rest is the medicine.",
            "Sit on your hands; the best trade now is none.",
            "Rest when it is time to rest, act when it is time to act.",
        ],
        lines: [
            ("Keeping the toes still: no blame.", "Halt before the first step errs."),
            ("Keeping the calves still: he cannot rescue him whom he follows.", "Dragged along; sorrow, but keep your own stance."),
            ("Keeping the hips still: making the sacrum stiff is dangerous.", "Forced quiet suffocates; stillness must grow, not clamp."),
            ("Keeping the trunk still: no blame.", "Rest at the center, though the self is not yet forgotten."),
            ("Keeping the jaws still: the words have order.", "Measured speech; remorse vanishes."),
            ("Noblehearted keeping still: good fortune.", "Stillness ripened into character; everything ends well."),
        ],
    },
    HexagramRecord {
        number: 53,
        id: "hex-53",
        name: "Jian",
        character: "漸",
        english: "Development",
        upper: "xun",
        lower: "gen",
        judgment: "Development: the maiden is given in marriage; good fortune, perseverance furthers.",
        image: "On the mountain, a tree: the noble one abides in dignity and virtue to improve the mores.",
        meanings: [
            "Gradual progress, like a tree on a mountain; nothing skipped.",
            "Courtship by proper stages; slowness is the proof.",
            "Advance through the established steps; each confers standing.",
            "Steady strengthening over months, not days.",
            "Patient laddered growth outperforms the leap.",
            "Let development take its ordered time; roots before height.",
        ],
        lines: [
            ("The wild goose gradually draws near the shore: the young son is in danger.", "A lone beginning amid talk; slowness protects."),
            ("The wild goose gradually draws near the cliff: eating and drinking in peace and concord.", "A first security, gladly shared."),
            ("The wild goose gradually draws near the plateau: the man goes forth and does not return.", "Provoked overreach; guard against the robber within."),
            ("The wild goose gradually draws near the tree: perhaps it will find a flat branch.", "An ill-suited perch made safe by pliancy."),
            ("The wild goose gradually draws near the summit: in the end nothing can hinder her.", "Isolated at the height; misunderstanding passes."),
            ("The wild goose gradually draws near the cloud heights: its feathers can be used for the rite.", "A completed ascent becomes an example."),
        ],
    },
    HexagramRecord {
        number: 54,
        id: "hex-54",
        name: "Gui Mei",
        character: "歸妹",
        english: "The Marrying Maiden",
        upper: "zhen",
        lower: "dui",
        judgment: "The marrying maiden: undertakings bring misfortune; nothing that would further.",
        image: "Thunder over the lake: the noble one understands the transitory in the light of the eternity of the end.",
        meanings: [
            "Entering on another's terms; affection without standing.",
            "A relationship begun informally; tact, not claims, sustains it.",
            "A junior position accepted; influence must be earned sideways.",
            "Dependence on another's rhythm; keep your own reserves.",
            "Unequal terms; do not press rights you do not hold.",
            "Mind the end from the beginning; duration needs right relation.",
        ],
        lines: [
            ("The marrying maiden as a concubine: a lame man who is able to tread.", "A modest role filled loyally still advances."),
            ("A one-eyed man who is able to see: the perseverance of a solitary man furthers.", "Keep faith though the partner fails it."),
            ("The marrying maiden as a slave: she marries as a concubine.", "Desire lowers the price of dignity; wait instead."),
            ("The marrying maiden draws out the allotted time: a late marriage comes in season.", "Better late and right than early and wrong."),
            ("The garments of the princess were less gorgeous than those of the serving maid.", "Inner worth dispenses with finery."),
            ("The woman holds the basket, but there are no fruits in it.", "Form without substance; the rite ratifies nothing."),
        ],
    },
    HexagramRecord {
        number: 55,
        id: "hex-55",
        name: "Feng",
        character: "豐",
        english: "Abundance",
        upper: "zhen",
        lower: "li",
        judgment: "Abundance has success; be not sad, be like the sun at midday.",
        image: "Both thunder and lightning come: the noble one decides lawsuits and carries out punishments.",
        meanings: [
            "The zenith hour; fullness that cannot be hoarded.",
            "A peak of shared joy; live it fully instead of fearing dusk.",
            "Maximum influence now; decide the big questions today.",
            "Energy at flood; spend it on what matters most.",
            "Harvest time; realize gains while the sun is high.",
            "Rule the noon hour justly; do not mourn the afternoon in advance.",
        ],
        lines: [
            ("When a man meets his destined ruler, they can be together ten days.", "A matched pairing of clarity and energy; go forward."),
            ("The curtain is of such fullness that the polestars can be seen at noon.", "Eclipse by intrigue; win through inner truth, not force."),
            ("The underbrush is of such abundance that the small stars can be seen at noon.", "So darkened that even strong arms hang idle; no blame."),
            ("He meets his ruler, who is of like kind.", "Darkness passes; wisdom meets vigor again."),
            ("Lines are coming: blessing and fame draw near.", "Counsel welcomed at the top; all benefit."),
            ("His house is in a state of abundance; he screens off his family.", "Wealth walled into solitude; three years sees no one."),
        ],
    },
    HexagramRecord {
        number: 56,
        id: "hex-56",
        name: "Lu",
        character: "旅",
        english: "The Wanderer",
        upper: "li",
        lower: "gen",
        judgment: "The wanderer: success through smallness; perseverance brings good fortune to the wanderer.",
        image: "Fire on the mountain: the noble one is clear-minded and cautious in imposing penalties and protracts no lawsuits.",
        meanings: [
            "A stranger's road; travel light and offend no one.",
            "Affection in transit; promise only what a traveler can keep.",
            "A temporary post; deliver well, claim little, move on.",
            "Unsettled conditions; protect rest and routine on the road.",
            "Liquidity over commitments while between homes.",
            "Be reserved, obliging, and ready to depart in good order.",
        ],
        lines: [
            ("If the wanderer busies himself with trivial things, he draws down misfortune.", "A guest who clowns loses his welcome."),
            ("The wanderer comes to an inn: he has his property with him and wins the steadfastness of a young servant.", "Modesty finds shelter and help."),
            ("The wanderer's inn burns down: he loses the steadfastness of the young servant.", "Meddling arrogance costs both roof and friend."),
            ("The wanderer rests in a shelter: he obtains his property and an ax.", "Provisional security, still on guard."),
            ("He shoots a pheasant; it drops with the first arrow.", "The right gesture wins standing abroad."),
            ("The bird's nest burns up: the wanderer laughs at first, then must lament.", "Carelessness at the height; the cow is lost with ease."),
        ],
    },
    HexagramRecord {
        number: 57,
        id: "hex-57",
        name: "Xun",
        character: "巽",
        english: "The Gentle",
        upper: "xun",
        lower: "xun",
        judgment: "The gentle: success through what is small; it furthers to have somewhere to go and to see the great person.",
        image: "Winds following one upon the other: the noble one spreads his commands abroad and carries out his undertakings.",
        meanings: [
            "Penetration by persistence; the wind shapes the rock.",
            "Influence by a thousand gentle repetitions.",
            "Steady lobbying beats the single grand gesture.",
            "Small continuous corrections heal what force cannot.",
            "Incremental, patient positioning; avoid dramatic bets.",
            "Choose a clear direction and blow toward it daily.",
        ],
        lines: [
            ("In advancing and in retreating, the perseverance of a warrior furthers.", "Indecision ended by soldierly resolve."),
            ("Penetration under the bed: priests and magicians are used in great number.", "Trace the hidden influence to its corner and expose it."),
            ("Repeated penetration: humiliation.", "Deliberation past the point of decision corrodes."),
            ("Remorse vanishes: during the hunt three kinds of game are caught.", "Modest competence yields threefold use."),
            ("Perseverance brings good fortune: before the change, three days; after the change, three days.", "Reform carefully prepared and carefully checked."),
            ("Penetration under the bed: he loses his property and his ax.", "Probing the dark too long costs the means of action."),
        ],
    },
    HexagramRecord {
        number: 58,
        id: "hex-58",
        name: "Dui",
        character: "兌",
        english: "The Joyous",
        upper: "dui",
        lower: "dui",
        judgment: "The joyous: success; perseverance is favorable.",
        image: "Lakes resting one on the other: the noble one joins with his friends for discussion and practice.",
        meanings: [
            "Joy grounded in strength; gladness that steadies others.",
            "Shared delight and open speech keep the waters fresh.",
            "A congenial climate; learning among friends multiplies.",
            "Cheerfulness heals; shallow amusement tires.",
            "Pleasant dealings; verify that the pleasure is not the product.",
            "Be joyous from the center out, firm within, gentle without.",
        ],
        lines: [
            ("Contented joyousness: good fortune.", "Quiet self-contained gladness, wanting nothing."),
            ("Sincere joyousness: remorse disappears.", "Truthful company, chosen over flattering pleasure."),
            ("Coming joyousness: misfortune.", "Amusement imported to fill emptiness."),
            ("Joyousness that is weighed is not at peace.", "Choose between the higher and lower pleasure; then rest."),
            ("Sincerity toward disintegrating influences is dangerous.", "Know the corroding company for what it is."),
            ("Seductive joyousness.", "Carried by every entertainment; vanity without a keel."),
        ],
    },
    HexagramRecord {
        number: 59,
        id: "hex-59",
        name: "Huan",
        character: "渙",
        english: "Dispersion",
        upper: "xun",
        lower: "kan",
        judgment: "Dispersion: success; the king approaches his temple; it furthers to cross the great water.",
        image: "The wind drives over the water: the kings of old sacrificed to the Lord and built temples.",
        meanings: [
            "Rigidity dissolves; the wind breaks up the ice.",
            "Estrangement melts where something higher is shared.",
            "Dissolve factions with a common purpose and mild means.",
            "Blocked energy disperses; warmth and movement free it.",
            "Unlock frozen holdings; circulation restores value.",
            "Dissolve what divides before it hardens into winter.",
        ],
        lines: [
            ("He brings help with the strength of a horse: good fortune.", "Disperse the misunderstanding at its first breath."),
            ("At the dissolution he hurries to that which supports him.", "In rising alienation, return to your anchor."),
            ("He dissolves his self: no remorse.", "The work is large enough to forget oneself in."),
            ("He dissolves his bond with his group: supreme good fortune.", "Above party; scattering the old circle seeds the new."),
            ("His loud cries are as dissolving as sweat: dissolution.", "A great liberating idea, proclaimed at the fever's height."),
            ("He dissolves his blood: departing, keeping at a distance, going out.", "Remove the wounding danger from your kin and go."),
        ],
    },
    HexagramRecord {
        number: 60,
        id: "hex-60",
        name: "Jie",
        character: "節",
        english: "Limitation",
        upper: "kan",
        lower: "dui",
        judgment: "Limitation: success; galling limitation must not be persevered in.",
        image: "Water over the lake: the noble one creates number and measure and examines the nature of virtue and correct conduct.",
        meanings: [
            "Banks give the water power; measure gives life form.",
            "Agreed boundaries protect the affection inside them.",
            "Budgets, scopes, and deadlines; limits make the work real.",
            "Moderation as method; neither binge nor fast.",
            "Set spending rules and honor them; thrift without misery.",
            "Limit firmly, but never gallingly; bitter rules breed revolt.",
        ],
        lines: [
            ("Not going out of the door and the courtyard is without blame.", "Know when the door must stay shut."),
            ("Not going out of the gate and the courtyard brings misfortune.", "The open moment missed by hesitation."),
            ("He who knows no limitation will have cause to lament.", "Extravagance writes its own reproach; own it, no blame."),
            ("Contented limitation: success.", "Natural measure costs no struggle."),
            ("Sweet limitation brings good fortune.", "Limits made lovely by taking them on oneself first."),
            ("Galling limitation: perseverance brings misfortune; remorse disappears.", "Severity may save once; as a rule it destroys."),
        ],
    },
    HexagramRecord {
        number: 61,
        id: "hex-61",
        name: "Zhong Fu",
        character: "中孚",
        english: "Inner Truth",
        upper: "xun",
        lower: "dui",
        judgment: "Inner truth: pigs and fishes; good fortune; it furthers to cross the great water.",
        image: "Wind over the lake: the noble one discusses criminal cases in order to delay executions.",
        meanings: [
            "Truth at the center moves even the unreachable.",
            "Trust that rests on understanding, not on oath.",
            "Persuade from within the other's standpoint; force converts no one.",
            "Alignment of inner and outer; the divided heart sickens.",
            "Confidence built slowly is the only durable credit.",
            "Let the heart be empty of prejudice and truth enters.",
        ],
        lines: [
            ("Being prepared brings good fortune: there are secret designs.", "Inner stability first; covert reliances disturb it."),
            ("A crane calling in the shade; its young answers it.", "The hidden word finds its kin; I share my good goblet."),
            ("He finds a comrade: now he beats the drum, now he stops, now he sobs, now he sings.", "A center lodged in another's moods."),
            ("The moon nearly at the full: the team horse goes astray.", "Turn humbly toward the source, leaving the faction."),
            ("He possesses truth which links together: no blame.", "A ruler's truth holds the whole fabric in place."),
            ("Cockcrow penetrating to heaven: perseverance brings misfortune.", "Words mounting higher than the truth that bears them."),
        ],
    },
    HexagramRecord {
        number: 62,
        id: "hex-62",
        name: "Xiao Guo",
        character: "小過",
        english: "Preponderance of the Small",
        upper: "zhen",
        lower: "gen",
        judgment: "Preponderance of the small: small things may be done, great things should not be done; the flying bird brings the message.",
        image: "Thunder on the mountain: the noble one in conduct gives preponderance to reverence, in mourning to grief, in expenditure to thrift.",
        meanings: [
            "A season of small things done exceptionally well.",
            "Exaggerate the courtesies, never the claims.",
            "Execute the details; postpone the grand designs.",
            "Extra conscientiousness in small routines protects.",
            "Keep below the treetops; modest positions only.",
            "Do not strive upward; the bird flying low finds its nest.",
        ],
        lines: [
            ("The bird meets with misfortune through flying.", "An untried wing should not attempt the peak."),
            ("She passes by her ancestor and meets her ancestress.", "Accept the modest approach and the modest post."),
            ("If one is not extremely careful, somebody may come from behind and strike.", "Confidence in small times invites the hidden blow."),
            ("Goes not, but meets without passing by: no blame.", "Hold back; use no force, remain watchful."),
            ("Dense clouds, no rain from our western territory: the prince shoots the bird in the cave.", "Seek the overlooked helper in a humble place."),
            ("He passes him by, not meeting him: flying away, misfortune.", "Soaring past the measure of the hour."),
        ],
    },
    HexagramRecord {
        number: 63,
        id: "hex-63",
        name: "Ji Ji",
        character: "既濟",
        english: "After Completion",
        upper: "kan",
        lower: "li",
        judgment: "After completion: success in small matters; at the beginning good fortune, at the end disorder.",
        image: "Water over fire: the noble one takes thought of misfortune and arms himself against it in advance.",
        meanings: [
            "Everything in place; the danger now is drift.",
            "The settled bond still needs daily attention.",
            "The project is delivered; maintenance is the new project.",
            "Equilibrium achieved; guard it with small disciplines.",
            "Consolidate gains; the completed position decays untended.",
            "In order, think of disorder; arm against it in advance.",
        ],
        lines: [
            ("He brakes his wheels; he gets his tail in the water.", "Restraint right after the crossing; no blame."),
            ("The woman loses the curtain of her carriage: do not run after it.", "Withheld recognition returns of itself in seven days."),
            ("The Illustrious Ancestor disciplines the Devil's Country for three years.", "The great mop-up; do not hand it to the unfit."),
            ("The finest clothes turn to rags: be careful all day long.", "Leaks below the waterline; keep the rags ready."),
            ("The neighbor in the east slaughters an ox; the neighbor in the west brings a small offering.", "Sincerity outweighs magnificence in the full time."),
            ("He gets his head in the water.", "Looking back at the crossed danger too long; peril returns."),
        ],
    },
    HexagramRecord {
        number: 64,
        id: "hex-64",
        name: "Wei Ji",
        character: "未濟",
        english: "Before Completion",
        upper: "li",
        lower: "kan",
        judgment: "Before completion: success; but if the little fox gets its tail wet after nearly completing the crossing, nothing furthers.",
        image: "Fire over water: the noble one is careful in the differentiation of things, so that each finds its place.",
        meanings: [
            "The last stretch; everything depends on finishing care.",
            "On the verge of understanding; one careless word can soak it.",
            "Deliverables nearly done; the end-game wants fresh vigilance.",
            "Almost recovered; the relapse hides in the final ease.",
            "Close to the goal; do not spend the gain before it lands.",
            "Cross like the old fox: listening to the ice at every step.",
        ],
        lines: [
            ("He gets his tail in the water: humiliating.", "The leap before the look, at the very start."),
            ("He brakes his wheels: perseverance brings good fortune.", "Poised restraint while the time ripens."),
            ("Before completion, attack brings misfortune; it furthers to cross the great water.", "The transition needs allies, not bravado."),
            ("Perseverance brings good fortune, remorse vanishes: shock, thus to discipline the Devil's Country.", "The decisive three-year struggle; reward follows."),
            ("The light of the noble one is true: good fortune.", "Victory's glow without vanity; trust is complete."),
            ("There is drinking of wine in genuine confidence: no blame.", "Celebrate the new time; but wet your head and lose it."),
        ],
    },
];
