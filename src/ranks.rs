//! The static table of taxonomic rank groups.

/// A named bucket of synonymous rank labels.
///
/// Counts of every member label are summed into the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroup {
    name: &'static str,
    members: &'static [&'static str],
}

impl RankGroup {
    const fn new(members: &'static [&'static str]) -> RankGroup {
        RankGroup {
            name: members[0],
            members,
        }
    }

    /// The display name of this group, which is its first member.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All rank labels rolled into this group, in declared order.
    pub fn members(&self) -> &'static [&'static str] {
        self.members
    }

    /// Check if `label` is one of this group's members.
    pub fn contains(&self, label: &str) -> bool {
        self.members.iter().any(|&m| m == label)
    }
}

/// Rank groups from the most specific to the most general.
pub const RANK_GROUPS: &[RankGroup] = &[
    RankGroup::new(&["subspecies", "strain", "varietas", "forma"]),
    RankGroup::new(&["species"]),
    RankGroup::new(&["genus", "subgenus", "species group", "species subgroup"]),
    RankGroup::new(&["family", "subfamily", "tribe", "subtribe"]),
    RankGroup::new(&["order", "suborder", "infraorder", "superfamily"]),
    RankGroup::new(&["class", "subclass", "superorder"]),
    RankGroup::new(&["phylum", "subphylum", "superclass"]),
    RankGroup::new(&["superkingdom", "kingdom", "subkingdom", "superphylum"]),
    RankGroup::new(&["no rank"]),
];

/// Find the group a rank label rolls up into.
pub fn find_group(label: &str) -> Option<&'static RankGroup> {
    RANK_GROUPS.iter().find(|g| g.contains(label))
}
