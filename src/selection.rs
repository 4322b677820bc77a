/*!
 * Best-candidate selection among side-files.
 *
 * Candidates are ranked first by the position of their language tag in the
 * user's preference list, then by subtype. The language rank is a hard gate:
 * a better subtype never compensates for a less wanted language.
 */

use log::debug;
use parking_lot::Mutex;

use crate::lang_tag::{LanguageTag, PreferenceList};
use crate::subtype::{SubtypeRank, classify};

/// Decide whether `candidate_name` should replace the current best file.
///
/// On acceptance `current_best_name` is overwritten with `candidate_name`
/// and `true` is returned. `current_tag` is `None` while the slot is empty.
pub fn consider_candidate(
    preferences: &PreferenceList,
    candidate_tag: &LanguageTag,
    current_tag: Option<&LanguageTag>,
    candidate_name: &str,
    current_best_name: &mut String,
) -> bool {
    let Some(candidate_rank) = preferences.position(candidate_tag) else {
        debug!("'{}' rejected: {} is not a wanted language", candidate_name, candidate_tag);
        return false;
    };

    let accept = match current_tag.map(|tag| preferences.position(tag)) {
        // Empty slot: anything but stripped SDH may fill it
        None => classify(candidate_name) > SubtypeRank::StrippedSdh,
        // A current best outside the list can always be displaced
        Some(None) => true,
        Some(Some(current_rank)) if candidate_rank < current_rank => true,
        Some(Some(current_rank)) if candidate_rank == current_rank => {
            classify(candidate_name) > classify(current_best_name)
        }
        Some(Some(_)) => false,
    };

    if accept {
        debug!("'{}' replaces '{}'", candidate_name, current_best_name);
        *current_best_name = candidate_name.to_string();
    } else {
        debug!("'{}' rejected in favour of '{}'", candidate_name, current_best_name);
    }
    accept
}

/// The best file found so far for one logical slot
#[derive(Debug, Clone, Default)]
pub struct SelectionSlot {
    tag: Option<LanguageTag>,
    name: String,
}

impl SelectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate, returns whether it became the slot's best
    pub fn consider(&mut self, preferences: &PreferenceList, tag: &LanguageTag, name: &str) -> bool {
        let accepted = consider_candidate(preferences, tag, self.tag.as_ref(), name, &mut self.name);
        if accepted {
            self.tag = Some(tag.clone());
        }
        accepted
    }

    /// File name of the current best, if any
    pub fn best_name(&self) -> Option<&str> {
        self.tag.as_ref().map(|_| self.name.as_str())
    }

    pub fn best_tag(&self) -> Option<&LanguageTag> {
        self.tag.as_ref()
    }

    /// Subtype of the current best, if any
    pub fn subtype(&self) -> Option<SubtypeRank> {
        self.best_name().map(classify)
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
    }

    /// Forget the current best, e.g. before the next media file
    pub fn reset(&mut self) {
        self.tag = None;
        self.name.clear();
    }

    /// Consume the slot, yielding the selected tag and file name
    pub fn into_best(self) -> Option<(LanguageTag, String)> {
        self.tag.map(|tag| (tag, self.name))
    }
}

/// A `SelectionSlot` that can be fed from several threads.
///
/// Each `consider` call holds the lock for the whole compare-and-replace.
#[derive(Debug, Default)]
pub struct SharedSlot {
    inner: Mutex<SelectionSlot>,
}

impl SharedSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consider(&self, preferences: &PreferenceList, tag: &LanguageTag, name: &str) -> bool {
        self.inner.lock().consider(preferences, tag, name)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SelectionSlot {
        self.inner.lock().clone()
    }

    pub fn into_inner(self) -> SelectionSlot {
        self.inner.into_inner()
    }
}
