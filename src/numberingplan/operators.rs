// Copyright (C) 2026 The ngphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::EnumIter;

/// The party a numbering-plan allocation belongs to.
///
/// This is a closed set: the active network operators licensed in the
/// Nigerian plan, plus the non-operator statuses the regulator uses for
/// sub-ranges that are not dialable mobile subscriptions. The status tags
/// cannot own a freshly generated allocation, but validation still has to
/// recognize and report them, since real input can land in such a sub-range.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorTag {
    /// MTN Nigeria.
    Mtn,
    /// Globacom.
    Glo,
    /// Airtel Nigeria.
    Airtel,
    /// 9mobile (formerly Etisalat/EMTS).
    NineMobile,
    /// ntel.
    Ntel,
    /// Smile Communications.
    Smile,
    /// Visafone Communications.
    Visafone,
    /// Shared value-added-service shortcode space, not real subscribers.
    SharedVas,
    /// Code or sub-range never handed out by the regulator.
    Unassigned,
    /// Allocation withdrawn from its former operator.
    Withdrawn,
    /// Allocation handed back to the regulator by its operator.
    Returned,
    /// Held back for interconnect or future use.
    Reserved,
    /// Tag could not be determined.
    Unknown,
}

impl OperatorTag {
    /// True only for tags that denote a live, licensed network operator.
    /// Everything else is a plan status and can never own a dialable number.
    pub fn is_active_operator(&self) -> bool {
        matches!(
            self,
            OperatorTag::Mtn
                | OperatorTag::Glo
                | OperatorTag::Airtel
                | OperatorTag::NineMobile
                | OperatorTag::Ntel
                | OperatorTag::Smile
                | OperatorTag::Visafone
        )
    }

    /// Human-readable brand name, as printed on end-user facing output.
    pub fn display_name(&self) -> &'static str {
        match self {
            OperatorTag::Mtn => "MTN",
            OperatorTag::Glo => "Globacom",
            OperatorTag::Airtel => "Airtel",
            OperatorTag::NineMobile => "9mobile",
            OperatorTag::Ntel => "ntel",
            OperatorTag::Smile => "Smile",
            OperatorTag::Visafone => "Visafone",
            OperatorTag::SharedVas => "Shared VAS",
            OperatorTag::Unassigned => "Unassigned",
            OperatorTag::Withdrawn => "Withdrawn",
            OperatorTag::Returned => "Returned",
            OperatorTag::Reserved => "Reserved",
            OperatorTag::Unknown => "Unknown",
        }
    }
}
