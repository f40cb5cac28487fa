//! Phrase bank — canned review fragments, grouped by slot and tone.
//!
//! Placeholders: `{{business}}`, `{{type}}`, `{{service}}`, `{{staffMember}}`, `{{highlight}}`.
//! Every template is a single sentence with no inner sentence break, so the
//! length adjuster can count sentences by counting fragments.

use crate::reviews::models::{PhraseSlot, Tone};

/// Returns the ordered templates for a slot in the given tone.
pub fn variants(slot: PhraseSlot, tone: Tone) -> &'static [&'static str] {
    match (slot, tone) {
        (PhraseSlot::Opening, Tone::Enthusiastic) => &[
            "Absolutely blown away by {{business}}!",
            "What an amazing experience at {{business}}!",
            "I can't say enough good things about {{business}}!",
            "{{business}} completely exceeded my expectations!",
            "Wow, {{business}} is hands down the best {{type}} I've worked with!",
        ],
        (PhraseSlot::Opening, Tone::Professional) => &[
            "I recently worked with {{business}} and was very impressed.",
            "{{business}} delivered a consistently high standard of work.",
            "My experience with {{business}} was thoroughly positive.",
            "I engaged {{business}} as our {{type}} and the results speak for themselves.",
        ],
        (PhraseSlot::Opening, Tone::Casual) => &[
            "Had a really good time with {{business}}.",
            "So I finally tried {{business}} and it was great.",
            "{{business}} is legit, no complaints here.",
            "Pretty happy with how things went at {{business}}.",
        ],

        (PhraseSlot::ServiceDescription, Tone::Enthusiastic) => &[
            "Their {{service}} was absolutely top-notch from start to finish!",
            "The {{service}} blew me away with how polished everything was!",
            "Everything about the {{service}} felt first-class!",
            "I've never seen {{service}} handled with this much care!",
        ],
        (PhraseSlot::ServiceDescription, Tone::Professional) => &[
            "The {{service}} was delivered efficiently and to a high standard.",
            "Their approach to {{service}} was organised and transparent.",
            "The quality of the {{service}} met every requirement we set.",
            "They handled the {{service}} with clear communication throughout.",
        ],
        (PhraseSlot::ServiceDescription, Tone::Casual) => &[
            "The {{service}} was solid and pretty painless.",
            "They did a nice job on the {{service}}.",
            "No fuss with the {{service}}, it just worked.",
            "Honestly the {{service}} was better than I expected.",
        ],

        (PhraseSlot::StaffMention, Tone::Enthusiastic) => &[
            "{{staffMember}} was incredibly helpful and went above and beyond!",
            "Huge shout-out to {{staffMember}} for being so amazing!",
            "{{staffMember}} made the whole process an absolute joy!",
        ],
        (PhraseSlot::StaffMention, Tone::Professional) => &[
            "{{staffMember}} was knowledgeable and attentive throughout the engagement.",
            "I would like to commend {{staffMember}} for their professionalism.",
            "{{staffMember}} managed our account with real diligence.",
        ],
        (PhraseSlot::StaffMention, Tone::Casual) => &[
            "{{staffMember}} was super chill and easy to talk to.",
            "Props to {{staffMember}} for sorting everything out.",
            "{{staffMember}} really knew their stuff.",
        ],

        (PhraseSlot::Timeliness, Tone::Enthusiastic) => &[
            "Everything was delivered right on time, which I loved!",
            "They were lightning fast and never missed a deadline!",
        ],
        (PhraseSlot::Timeliness, Tone::Professional) => &[
            "All deliverables arrived on schedule.",
            "They respected every agreed deadline without exception.",
        ],
        (PhraseSlot::Timeliness, Tone::Casual) => &[
            "They were quick and right on time too.",
            "No waiting around, they showed up when they said they would.",
        ],

        (PhraseSlot::Highlight, Tone::Enthusiastic) => &[
            "The highlight for me was {{highlight}}, simply incredible!",
            "I especially loved {{highlight}}!",
            "{{highlight}} was the cherry on top!",
        ],
        (PhraseSlot::Highlight, Tone::Professional) => &[
            "I was particularly impressed by {{highlight}}.",
            "A notable strength was {{highlight}}.",
            "{{highlight}} stood out as especially well executed.",
        ],
        (PhraseSlot::Highlight, Tone::Casual) => &[
            "Best part was {{highlight}}.",
            "Really dug {{highlight}}.",
            "{{highlight}} was a nice touch.",
        ],

        (PhraseSlot::Recommendation, Tone::Enthusiastic) => &[
            "I recommend {{business}} to absolutely everyone!",
            "If you need a {{type}}, don't even think twice about {{business}}!",
            "Tell your friends, {{business}} is the real deal!",
        ],
        (PhraseSlot::Recommendation, Tone::Professional) => &[
            "I would recommend {{business}} without hesitation.",
            "I can confidently recommend {{business}} to any organisation looking for a {{type}}.",
            "{{business}} comes highly recommended.",
        ],
        (PhraseSlot::Recommendation, Tone::Casual) => &[
            "Would definitely recommend.",
            "If you're on the fence about {{business}}, just go for it.",
            "I'd tell a friend to check out {{business}}.",
        ],

        (PhraseSlot::ReturnIntent, Tone::Enthusiastic) => &[
            "I'll definitely be back for more!",
            "Already planning my next project with them!",
            "Can't wait to work with {{business}} again!",
        ],
        (PhraseSlot::ReturnIntent, Tone::Professional) => &[
            "We will certainly engage {{business}} again for future work.",
            "I look forward to working with them again.",
            "We plan to continue the relationship with {{business}}.",
        ],
        (PhraseSlot::ReturnIntent, Tone::Casual) => &[
            "I'll be back for sure.",
            "Gonna use them again next time.",
            "Pretty sure I'll be going back to {{business}}.",
        ],

        (PhraseSlot::Closing, Tone::Enthusiastic) => &[
            "Five stars all the way!",
            "Thank you {{business}}, you guys rock!",
            "Couldn't be happier, thank you so much!",
            "Simply the best, thanks {{business}}!",
        ],
        (PhraseSlot::Closing, Tone::Professional) => &[
            "Thank you to the team at {{business}}.",
            "Overall, an excellent experience.",
            "A reliable {{type}} that I am pleased to endorse.",
            "Many thanks for a job well done.",
        ],
        (PhraseSlot::Closing, Tone::Casual) => &[
            "Thanks {{business}}!",
            "All in all, good stuff.",
            "Solid five stars from me.",
            "Cheers to the crew at {{business}}.",
        ],

        (PhraseSlot::ExtraDetail, Tone::Enthusiastic) => &[
            "The whole team was friendly, responsive, and genuinely cared about the result!",
            "Communication was fantastic from the very first call!",
            "You can tell they really love what they do!",
            "The attention to detail was out of this world!",
        ],
        (PhraseSlot::ExtraDetail, Tone::Professional) => &[
            "Communication was prompt and every question was answered clearly.",
            "The pricing was fair and transparent for the value delivered.",
            "Their process was well structured from onboarding to completion.",
            "The team demonstrated strong expertise as a {{type}}.",
        ],
        (PhraseSlot::ExtraDetail, Tone::Casual) => &[
            "Everyone there was really friendly.",
            "Prices felt fair for what you get.",
            "They kept me in the loop the whole way.",
            "You can tell they know what they're doing.",
        ],
    }
}

/// Number of templates per (slot, tone) pair, for diagnostics.
pub fn inventory() -> Vec<(PhraseSlot, Tone, usize)> {
    PhraseSlot::ALL
        .iter()
        .flat_map(|&slot| {
            Tone::ALL
                .iter()
                .map(move |&tone| (slot, tone, variants(slot, tone).len()))
        })
        .collect()
}
