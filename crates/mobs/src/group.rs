//! group.txt and group_group.txt records
//!
//! # Format
//! ```text
//! Group	WolfPack
//! {
//! 	Vnum	101
//! 	Leader	Grey Wolf	102
//! 	1	Wolf	101
//! 	2	Wolf	101
//! }
//!
//! Group	WolfPacks
//! {
//! 	Vnum	1001
//! 	1	101	60
//! 	2	102	40
//! }
//! ```

use protoforge_core::Vnum;
use protoforge_formats::{BlockWriter, SectionBlock};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Index given to the leader row
pub const LEADER_INDEX: u32 = 0;

/// A spawn group of mobs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobGroup {
    pub vnum: Vnum,
    pub name: String,
}

/// One mob of a spawn group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobGroupMember {
    pub group_vnum: Vnum,
    pub index: u32,
    pub name: String,
    pub mob_vnum: Vnum,
    pub leader: bool,
}

impl MobGroup {
    /// Build a group and its members from a block
    ///
    /// `Vnum` is mandatory. Without a usable `Leader` line the first member
    /// is promoted to leader.
    pub fn from_block(block: &SectionBlock) -> Option<(Self, Vec<MobGroupMember>)> {
        let Some(vnum) = block.parse_scalar::<Vnum>("Vnum") else {
            trace!("mob group at line {} has no Vnum", block.line);
            return None;
        };

        let leader = block.scalar("Leader").and_then(|values| {
            Some(MobGroupMember {
                group_vnum: vnum,
                index: LEADER_INDEX,
                name: values.first()?.clone(),
                mob_vnum: values.get(1)?.parse().ok()?,
                leader: true,
            })
        });

        let mut members: Vec<MobGroupMember> = leader.into_iter().collect();
        members.extend(block.members().filter_map(|line| {
            Some(MobGroupMember {
                group_vnum: vnum,
                index: line.index,
                name: line.field(0)?.to_string(),
                mob_vnum: line.parse(1)?,
                leader: false,
            })
        }));

        if let Some(first) = members.first_mut().filter(|member| !member.leader) {
            trace!("mob group {} has no leader, promoting {}", vnum, first.name);
            first.leader = true;
            first.index = LEADER_INDEX;
        }

        let group = Self {
            vnum,
            name: block.name.clone().unwrap_or_default(),
        };
        Some((group, members))
    }

    pub fn write<'a, I>(&self, writer: &mut BlockWriter, members: I)
    where
        I: IntoIterator<Item = &'a MobGroupMember>,
    {
        let (leaders, others): (Vec<&MobGroupMember>, Vec<&MobGroupMember>) =
            members.into_iter().partition(|member| member.leader);

        writer.open_group(&self.name).scalar("Vnum", &[self.vnum]);
        if let Some(leader) = leaders.first() {
            writer.scalar("Leader", &[leader.name.clone(), leader.mob_vnum.to_string()]);
        }
        for member in others {
            writer.member(member.index, &[member.name.clone(), member.mob_vnum.to_string()]);
        }
        writer.close_group();
    }
}

/// A group of spawn groups, one of which is picked per spawn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobGroupGroup {
    pub vnum: Vnum,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobGroupGroupMember {
    pub group_group_vnum: Vnum,
    pub index: u32,
    pub group_vnum: Vnum,
    pub probability: u32,
}

/// Weight of a member line that leaves the probability out
const DEFAULT_PROBABILITY: u32 = 1;

impl MobGroupGroup {
    /// Build a group of groups from a block; `Vnum` is mandatory
    pub fn from_block(block: &SectionBlock) -> Option<(Self, Vec<MobGroupGroupMember>)> {
        let Some(vnum) = block.parse_scalar::<Vnum>("Vnum") else {
            trace!("group of groups at line {} has no Vnum", block.line);
            return None;
        };

        let members = block
            .members()
            .filter_map(|line| {
                Some(MobGroupGroupMember {
                    group_group_vnum: vnum,
                    index: line.index,
                    group_vnum: line.parse(0)?,
                    probability: line.parse(1).unwrap_or(DEFAULT_PROBABILITY),
                })
            })
            .collect();

        let group = Self {
            vnum,
            name: block.name.clone().unwrap_or_default(),
        };
        Some((group, members))
    }

    pub fn write<'a, I>(&self, writer: &mut BlockWriter, members: I)
    where
        I: IntoIterator<Item = &'a MobGroupGroupMember>,
    {
        writer.open_group(&self.name).scalar("Vnum", &[self.vnum]);
        for member in members {
            writer.member(member.index, &[member.group_vnum, member.probability]);
        }
        writer.close_group();
    }
}
