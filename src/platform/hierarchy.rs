//! Role hierarchy checks for kick/ban eligibility
//!
//! Mirrors Discord's own rules: nobody can act on the owner, the bot cannot act
//! on itself, and otherwise the bot's highest role must sit strictly above the
//! target's and carry the matching permission.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use serenity::model::permissions::Permissions;
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eligibility {
    pub kickable: bool,
    pub bannable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFacts {
    pub position: i64,
    pub permissions: Permissions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFacts {
    pub user_id: u64,
    pub role_ids: Vec<u64>,
}

/// The parts of a guild the hierarchy rules need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildFacts {
    /// Also the id of the @everyone role
    pub guild_id: u64,
    pub owner_id: u64,
    pub roles: HashMap<u64, RoleFacts>,
}

impl GuildFacts {
    /// Highest role of a member as (role id, position); @everyone when none apply.
    ///
    /// Equal positions are broken by the older (lower) id, as Discord does.
    pub fn highest_role(&self, member: &MemberFacts) -> (u64, i64) {
        member
            .role_ids
            .iter()
            .filter_map(|id| self.roles.get(id).map(|r| (*id, r.position)))
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .unwrap_or_else(|| (self.guild_id, self.everyone_position()))
    }

    fn everyone_position(&self) -> i64 {
        self.roles
            .get(&self.guild_id)
            .map(|r| r.position)
            .unwrap_or(0)
    }

    /// Guild-level permissions of a member: @everyone plus every assigned role.
    pub fn permissions(&self, member: &MemberFacts) -> Permissions {
        if member.user_id == self.owner_id {
            return Permissions::all();
        }
        let mut permissions = self
            .roles
            .get(&self.guild_id)
            .map(|r| r.permissions)
            .unwrap_or_else(Permissions::empty);
        for id in &member.role_ids {
            if let Some(role) = self.roles.get(id) {
                permissions |= role.permissions;
            }
        }
        if permissions.contains(Permissions::ADMINISTRATOR) {
            return Permissions::all();
        }
        permissions
    }

    fn manageable(&self, bot: &MemberFacts, target: &MemberFacts) -> bool {
        if target.user_id == self.owner_id || target.user_id == bot.user_id {
            return false;
        }
        if bot.user_id == self.owner_id {
            return true;
        }
        let (bot_role, bot_position) = self.highest_role(bot);
        let (target_role, target_position) = self.highest_role(target);
        (bot_position, Reverse(bot_role)) > (target_position, Reverse(target_role))
    }

    /// What the bot may do to `target`
    pub fn eligibility(&self, bot: &MemberFacts, target: &MemberFacts) -> Eligibility {
        if !self.manageable(bot, target) {
            return Eligibility::default();
        }
        let permissions = self.permissions(bot);
        Eligibility {
            kickable: permissions.contains(Permissions::KICK_MEMBERS),
            bannable: permissions.contains(Permissions::BAN_MEMBERS),
        }
    }
}
