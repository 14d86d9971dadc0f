//! Display labels and gating predicates for compute instances.
//!
//! The compute service reports three overlapping vocabularies (status,
//! task state, power state); the lookup tables below map every code the
//! backend emits to the label the console shows.

/// Statuses an instance passes through while an operation is in flight.
pub fn transition_status(code: &str) -> Option<&'static str> {
    match code {
        "build" => Some("Build"),
        "building" => Some("Building"),
        "stopped" => Some("Stopped"),
        "recovering" => Some("Recovering"),
        "rescued" => Some("Rescued"),
        "resized" => Some("Resized"),
        "scheduling" => Some("Scheduling"),
        "reboot" => Some("Reboot"),
        "hard_reboot" => Some("Hard Reboot"),
        "migrating" => Some("Migrating"),
        _ => None,
    }
}

/// Statuses an instance settles into once the backend is done with it.
pub fn stable_status(code: &str) -> Option<&'static str> {
    match code {
        "deleted" => Some("Deleted"),
        "active" => Some("Active"),
        "shutoff" => Some("Shutoff"),
        "paused" => Some("Paused"),
        "error" => Some("Error"),
        "resize" | "verify_resize" => Some("Resizing or Migrating"),
        "revert_resize" => Some("Revert Resize/Migrate"),
        "password" => Some("Password"),
        "rebuild" => Some("Rebuild"),
        "rescue" => Some("Rescue"),
        "soft-delete" | "soft_deleted" => Some("Soft Deleted"),
        "shelved" => Some("Shelved"),
        "shelved_offloaded" => Some("Shelved Offloaded"),
        "suspended" => Some("Suspended"),
        "stopped" => Some("Shutoff"),
        _ => None,
    }
}

pub fn task_status(code: &str) -> Option<&'static str> {
    match code {
        "scheduling" => Some("Scheduling"),
        "block_device_mapping" => Some("Block Device Mapping"),
        "networking" => Some("Networking"),
        "spawning" => Some("Spawning"),
        "image_snapshot" => Some("Snapshotting"),
        "image_snapshot_pending" => Some("Image Snapshot Pending"),
        "image_pending_upload" => Some("Image Pending Upload"),
        "image_uploading" => Some("Image Uploading"),
        "image_backup" => Some("Image Backup"),
        "updating_password" => Some("Updating Password"),
        "resize_prep" | "resize_migrating" | "resize_migrated" | "resize_finish" => {
            Some("Resizing or Migrating")
        }
        "resize_reverting" => Some("Reverting Resize or Migrate"),
        "resize_confirming" => Some("Confirming Resize or Migrate"),
        "rebooting" | "reboot_pending" | "reboot_started" => Some("Rebooting"),
        "rebooting_hard" | "reboot_pending_hard" | "reboot_started_hard" => Some("Hard Rebooting"),
        "pausing" => Some("Pausing"),
        "unpausing" | "resuming" => Some("Resuming"),
        "suspending" => Some("Suspending"),
        "powering-off" => Some("Powering Off"),
        "powering-on" => Some("Powering On"),
        "rescuing" => Some("Rescuing"),
        "unrescuing" => Some("Unrescuing"),
        "rebuilding" => Some("Rebuilding"),
        "rebuild_block_device_mapping" => Some("Rebuild Block Device Mapping"),
        "rebuild_spawning" => Some("Rebuild Spawning"),
        "migrating" => Some("Migrating"),
        "deleting" => Some("Deleting"),
        "soft-deleting" => Some("Soft Deleting"),
        "restoring" => Some("Restoring"),
        "shelving" => Some("Shelving"),
        "shelving_image_pending_upload" => Some("Shelving Image Pending Upload"),
        "shelving_image_uploading" => Some("Shelving Image Uploading"),
        "shelving_offloading" => Some("Shelving Offloading"),
        "unshelving" => Some("Unshelving"),
        _ => None,
    }
}

pub fn power_status(code: &str) -> Option<&'static str> {
    match code {
        "NO STATE" => Some("No State"),
        "RUNNING" => Some("Running"),
        "BLOCKED" => Some("Blocked"),
        "PAUSED" => Some("Paused"),
        "SHUTDOWN" => Some("Shut Down"),
        "SHUTOFF" => Some("Shut Off"),
        "CRASHED" => Some("Crashed"),
        "SUSPENDED" => Some("Suspended"),
        "FAILED" => Some("Failed"),
        "BUILDING" => Some("Building"),
        _ => None,
    }
}

/// Combined lookup across all four vocabularies. On key collisions the
/// power table wins over task, task over stable, stable over transition.
pub fn instance_status(code: &str) -> Option<&'static str> {
    power_status(code)
        .or_else(|| task_status(code))
        .or_else(|| stable_status(code))
        .or_else(|| transition_status(code))
}

/// Display label for a status code, falling back to the raw code.
pub fn format_status(code: &str) -> String {
    instance_status(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

/// Task-state label; the backend sends null when no task is running.
pub fn format_task_state(task: Option<&str>) -> String {
    match task {
        None => "No Task".to_string(),
        Some(code) => task_status(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_string()),
    }
}

pub fn format_power_state(code: &str) -> String {
    power_status(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

/// Labels for the instance action log.
pub fn action_label(action: &str) -> Option<&'static str> {
    match action {
        "attach_interface" => Some("Attach Interface"),
        "detach_interface" => Some("Detach Interface"),
        "attach_volume" => Some("Attach Volume"),
        "detach_volume" => Some("Detach Volume"),
        "create" => Some("Create"),
        "stop" => Some("Stop"),
        "reboot" => Some("Reboot"),
        "suspend" => Some("Suspend"),
        "resume" => Some("Resume"),
        "shelve" => Some("Shelve"),
        "unshelve" => Some("Unshelve"),
        "start" => Some("Start"),
        "lock" => Some("Lock"),
        "unlock" => Some("Unlock"),
        "pause" => Some("Pause"),
        "unpause" => Some("Unpause"),
        "createImage" => Some("Create Snapshot"),
        "resize" => Some("Extend Root Volume"),
        "confirmResize" => Some("Resize"),
        "live-resize" => Some("Online Resize"),
        "extend_volume" => Some("Extend Volume"),
        "changePassword" => Some("Change Password"),
        "rebuild" => Some("Rebuild"),
        "migrate" => Some("Migrate"),
        "live-migration" => Some("Live Migrate"),
        "delete" => Some("Delete"),
        "restore" => Some("Recover"),
        _ => None,
    }
}

pub fn format_action(action: &str) -> String {
    action_label(action)
        .map(str::to_string)
        .unwrap_or_else(|| action.to_string())
}

/// Labels for the per-request event breakdown of the action log.
pub fn action_event_label(event: &str) -> Option<&'static str> {
    match event {
        "compute_restore_instance" => Some("Resume Instance"),
        "compute_soft_delete_instance" => Some("Soft Delete Instance"),
        "compute_post_live_migration_at_destination" => Some("Live Migration At Destination"),
        "compute_pre_live_migration" => Some("Pre Live Migration"),
        "compute_live_migration" => Some("Compute Live Migration"),
        "compute_check_can_live_migrate_source" => Some("Check Can Live Migrate Source"),
        "compute_check_can_live_migrate_destination" => Some("Check Can Live Migrate Destination"),
        "conductor_live_migrate_instance" => Some("Conductor Live Migrate Instance"),
        "compute_confirm_resize" => Some("Resized"),
        "compute_finish_resize" => Some("Finish Resize"),
        "compute_resize_instance" => Some("Resize Instance"),
        "compute_prep_resize" => Some("Prep Resize"),
        "cold_migrate" => Some("Cold Migrate"),
        "conductor_migrate_server" => Some("Conductor Migrate Server"),
        "compute_rebuild_instance" | "rebuild_server" => Some("Rebuild Instance"),
        "compute_set_admin_password" => Some("Set Admin Password"),
        "compute_extend_volume" => Some("Extend Volume"),
        "compute_live_resize_instance" => Some("Compute Live Resize Instance"),
        "conductor_live_resize_instance" => Some("Conductor Live Resize Instance"),
        "api_snapshot_instance" => Some("Snapshot Instance"),
        "api_lock" => Some("Lock"),
        "api_unlock" => Some("Unlock"),
        "compute_detach_volume" => Some("Detach Volume"),
        "compute_attach_volume" => Some("Attach Volume"),
        "compute_detach_interface" => Some("Detach Interface"),
        "compute_attach_interface" => Some("Attach Interface"),
        "compute__do_build_and_run_instance" => Some("Do Build And Run Instance"),
        "compute_suspend_instance" => Some("Compute Suspend Instance"),
        "compute_start_instance" => Some("Compute Start Instance"),
        "compute_stop_instance" => Some("Compute Stop Instance"),
        "compute_resume_instance" => Some("Compute Resume Instance"),
        "compute_pause_instance" => Some("Compute Pause Instance"),
        "compute_unpause_instance" => Some("Compute Unpause Instance"),
        "compute_reboot_instance" => Some("Compute Reboot Instance"),
        _ => None,
    }
}

pub fn format_action_event(event: &str) -> String {
    action_event_label(event)
        .map(str::to_string)
        .unwrap_or_else(|| event.to_string())
}

pub fn is_building(status: &str) -> bool {
    status == "build"
}

/// True when either the status or the vm_state is in the allow-list.
/// Comparison is case-insensitive on the instance side.
pub fn check_status(allowed: &[&str], status: &str, vm_state: Option<&str>) -> bool {
    if allowed.contains(&status.to_lowercase().as_str()) {
        return true;
    }
    match vm_state {
        Some(vm) => allowed.contains(&vm.to_lowercase().as_str()),
        None => false,
    }
}

pub fn is_active(status: &str, vm_state: Option<&str>) -> bool {
    check_status(&["active"], status, vm_state)
}

pub fn is_shut_off(status: &str, vm_state: Option<&str>) -> bool {
    check_status(&["shutoff"], status, vm_state)
}

pub fn is_active_or_shut_off(status: &str, vm_state: Option<&str>) -> bool {
    check_status(&["active", "shutoff"], status, vm_state)
}

pub fn is_not_error(status: &str, vm_state: Option<&str>) -> bool {
    !check_status(&["error"], status, vm_state)
}

pub fn is_not_deleting(task_state: Option<&str>) -> bool {
    match task_state {
        Some(task) => task.to_lowercase() != "deleting",
        None => true,
    }
}

/// Locked instances only accept actions from admins.
pub fn is_not_locked_or_admin(locked: bool, is_admin: bool) -> bool {
    if locked {
        is_admin
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_lookup_precedence() {
        // "stopped" is Stopped in the transition table but Shutoff once
        // the stable table overrides it.
        assert_eq!(instance_status("stopped"), Some("Shutoff"));
        // Task and transition tables agree on these; either way the merged
        // table resolves them.
        assert_eq!(instance_status("migrating"), Some("Migrating"));
        assert_eq!(instance_status("scheduling"), Some("Scheduling"));
        // Power codes are upper-case and never shadowed.
        assert_eq!(instance_status("SHUTOFF"), Some("Shut Off"));
        assert_eq!(instance_status("shutoff"), Some("Shutoff"));
    }

    #[test]
    fn test_format_status_falls_back_to_raw_code() {
        assert_eq!(format_status("zombified"), "zombified");
        assert_eq!(format_status("active"), "Active");
    }

    #[test]
    fn test_task_state_null_means_no_task() {
        assert_eq!(format_task_state(None), "No Task");
        assert_eq!(format_task_state(Some("spawning")), "Spawning");
        assert_eq!(format_task_state(Some("weird")), "weird");
    }

    #[test]
    fn test_check_status_considers_vm_state() {
        assert!(check_status(&["active"], "ACTIVE", None));
        assert!(check_status(&["active"], "ERROR", Some("Active")));
        assert!(!check_status(&["active"], "ERROR", None));
        assert!(is_active_or_shut_off("SHUTOFF", None));
        assert!(is_not_error("active", None));
        assert!(!is_not_error("ERROR", None));
    }

    #[test]
    fn test_lock_gating() {
        assert!(is_not_locked_or_admin(false, false));
        assert!(is_not_locked_or_admin(true, true));
        assert!(!is_not_locked_or_admin(true, false));
    }

    #[test]
    fn test_deleting_task_blocks_actions() {
        assert!(is_not_deleting(None));
        assert!(is_not_deleting(Some("spawning")));
        assert!(!is_not_deleting(Some("Deleting")));
    }

    #[test]
    fn test_action_log_labels() {
        assert_eq!(format_action("attach_volume"), "Attach Volume");
        assert_eq!(format_action("live-migration"), "Live Migrate");
        assert_eq!(format_action("unknown_op"), "unknown_op");
        assert_eq!(
            format_action_event("compute_reboot_instance"),
            "Compute Reboot Instance"
        );
        assert_eq!(format_action_event("rebuild_server"), "Rebuild Instance");
    }
}
