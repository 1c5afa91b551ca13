// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

/// The blueprint or item put into a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInput {
    /// The installed item.
    pub blueprint_id: i64,

    /// Whether it is a blueprint copy.
    pub is_bpc: bool,

    /// Where it was installed from.
    pub location_id: i64,

    /// How many were installed.
    pub quantity: i64,

    /// Productivity level of the blueprint.
    pub prod_level: i64,

    /// Material level of the blueprint.
    pub mat_level: i64,

    /// Runs left on a copy, -1 for originals.
    pub runs_left: i64,

    /// The inventory flag of the installed item.
    pub item_flag: i64,

    /// The type of the installed item.
    pub type_id: i64,
}

/// What a job produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutput {
    /// Where the product goes.
    pub location_id: i64,

    /// Runs on the produced copy, for copying jobs.
    pub bpc_runs: i64,

    /// The location of the facility.
    pub container_location_id: i64,

    /// The type produced.
    pub type_id: i64,

    /// The inventory flag of the output.
    pub flag: i64,
}

/// Time and material multipliers applied to a job.
#[derive(Debug, Clone, PartialEq)]
pub struct Multipliers {
    /// Of the facility, on materials.
    pub material: f64,

    /// Of the character, on materials.
    pub char_material: f64,

    /// Of the facility, on time.
    pub time: f64,

    /// Of the character, on time.
    pub char_time: f64,
}

/// A manufacturing, research or invention job.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryJob {
    /// The unique id of this job.
    pub id: i64,

    /// The assembly line the job runs on.
    pub line_id: i64,

    /// The facility the job runs in.
    pub container_id: i64,

    /// What went in.
    pub input: JobInput,

    /// What comes out.
    pub output: JobOutput,

    /// How many runs were ordered.
    pub runs: i64,

    /// Who installed the job.
    pub installer_id: i64,

    /// The solar system of the facility.
    pub system_id: i64,

    /// Multipliers in effect.
    pub multipliers: Multipliers,

    /// The type of the facility.
    pub container_type_id: i64,

    /// Whether the output was delivered.
    pub delivered: bool,

    /// Whether the job completed successfully.
    pub finished: bool,

    /// The raw completion status code.
    pub status: i64,

    /// The activity, such as manufacturing (1) or invention (8).
    pub activity_id: i64,

    /// When the job was installed.
    pub install_ts: Timestamp,

    /// When production started.
    pub begin_ts: Timestamp,

    /// When production ends.
    pub end_ts: Timestamp,

    /// When production was paused, if it was.
    pub pause_ts: Option<Timestamp>,
}

impl TryFrom<&Element> for IndustryJob {
    type Error = Error;

    fn try_from(row: &Element) -> Result<IndustryJob, Error> {
        Ok(IndustryJob {
            id: get_attr!(row, "jobID", Required),
            line_id: get_attr!(row, "assemblyLineID", Required),
            container_id: get_attr!(row, "containerID", Required),
            input: JobInput {
                blueprint_id: get_attr!(row, "installedItemID", Required),
                is_bpc: get_attr!(row, "installedItemCopy", Bool),
                location_id: get_attr!(row, "installedItemLocationID", Required),
                quantity: get_attr!(row, "installedItemQuantity", Required),
                prod_level: get_attr!(row, "installedItemProductivityLevel", Required),
                mat_level: get_attr!(row, "installedItemMaterialLevel", Required),
                runs_left: get_attr!(row, "installedItemLicensedProductionRunsRemaining", Required),
                item_flag: get_attr!(row, "installedItemFlag", Required),
                type_id: get_attr!(row, "installedItemTypeID", Required),
            },
            output: JobOutput {
                location_id: get_attr!(row, "outputLocationID", Required),
                bpc_runs: get_attr!(row, "licensedProductionRuns", Required),
                container_location_id: get_attr!(row, "containerLocationID", Required),
                type_id: get_attr!(row, "outputTypeID", Required),
                flag: get_attr!(row, "outputFlag", Required),
            },
            runs: get_attr!(row, "runs", Required),
            installer_id: get_attr!(row, "installerID", Required),
            system_id: get_attr!(row, "installedInSolarSystemID", Required),
            multipliers: Multipliers {
                material: get_attr!(row, "materialMultiplier", Required),
                char_material: get_attr!(row, "charMaterialMultiplier", Required),
                time: get_attr!(row, "timeMultiplier", Required),
                char_time: get_attr!(row, "charTimeMultiplier", Required),
            },
            container_type_id: get_attr!(row, "containerTypeID", Required),
            delivered: get_attr!(row, "completed", Bool),
            finished: get_attr!(row, "completedSuccessfully", Bool),
            status: get_attr!(row, "completedStatus", Required),
            activity_id: get_attr!(row, "activityID", Required),
            install_ts: get_attr!(row, "installTime", Required),
            begin_ts: get_attr!(row, "beginProductionTime", Required),
            end_ts: get_attr!(row, "endProductionTime", Required),
            pause_ts: get_attr!(row, "pauseProductionTime", OptionEmpty),
        })
    }
}

/// Parse `char/IndustryJobs`, keyed by job id.
pub fn parse_industry_jobs(result: &Element) -> Result<BTreeMap<i64, IndustryJob>, Error> {
    let mut jobs = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let job = IndustryJob::try_from(row)?;
        jobs.insert(job.id, job);
    }
    Ok(jobs)
}
