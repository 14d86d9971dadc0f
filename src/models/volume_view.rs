#[derive(Clone, Debug)]
pub struct VolumeAttachmentView {
    pub server_id: String,
    pub server_name: String,
    pub device: String,
}

#[derive(Clone, Debug)]
pub struct VolumeImageView {
    pub image_id: String,
    pub image_name: String,
}

#[derive(Clone, Debug)]
pub struct VolumeTransferView {
    pub id: String,
    pub name: String,
    pub created_display: String,
}

#[derive(Clone, Debug)]
pub struct VolumeView {
    pub id: String,
    pub name: String,
    pub status: String,
    pub size_display: String,
    pub volume_type: String,
    pub bootable: bool,
    pub created_display: String,
    pub attachments: Vec<VolumeAttachmentView>,
    /// Present only when the volume was created from an image.
    pub image: Option<VolumeImageView>,
    /// Present only while an ownership transfer is pending.
    pub transfer: Option<VolumeTransferView>,
}
