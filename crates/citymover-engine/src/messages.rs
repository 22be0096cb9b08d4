//! Arabic user-facing strings
//!
//! Front ends show these instead of `ExError` display text.

use citymover_core::areas::DAMASCUS_ACTIVE_AREAS;
use citymover_core::errors::{ExError, ExErrorKind};

use crate::queries::BrowseOutcome;

pub const LOGIN_FAILED: &str = "بيانات الدخول غير صحيحة، حاول مرة أخرى.";
pub const CREDENTIALS_REQUIRED: &str = "الرجاء إدخال اسم مستخدم وكلمة مرور.";
pub const SIGNUP_OK: &str = "تم إنشاء الحساب بنجاح! تم تسجيل الدخول تلقائياً.";
pub const LISTING_SAVED: &str = "تم حفظ العقار بنجاح ✅";
pub const LISTING_UPDATED: &str = "تم تحديث بيانات العقار بنجاح";
pub const LISTING_DELETED: &str = "تم حذف العقار بنجاح";
pub const LISTING_UNCHANGED: &str = "لم يتم العثور على العقار أو لا تملك صلاحية تعديله.";
pub const NO_OWN_LISTINGS: &str = "لم تقم بإضافة أي عقار بعد.";

pub const SELECT_CITY_FIRST: &str = "الرجاء اختيار مدينة أولاً.";
pub const SELECT_AREA: &str = "الرجاء اختيار منطقة لعرض المنازل المتاحة.";
pub const AREA_CLOSED: &str = "لا توجد منازل متاحة في هذه المنطقة حالياً.";
pub const NO_LISTINGS_IN_AREA: &str = "لا يوجد منازل متاحة حالياً في المنطقة المختارة.";

/// Damascus districts open for listings, as shown under the area picker
pub fn active_areas_hint() -> String {
    format!("المناطق المفعلة: {}", DAMASCUS_ACTIVE_AREAS.join(", "))
}

fn validation_message(field: Option<&str>) -> String {
    match field {
        Some("username") | Some("password") => CREDENTIALS_REQUIRED.to_string(),
        Some("city") => "الرجاء اختيار مدينة.".to_string(),
        Some("area") => "الرجاء اختيار منطقة أو كتابة اسم منطقة جديدة.".to_string(),
        Some("title") => "الرجاء إدخال عنوان العقار.".to_string(),
        Some("rent") => "الإيجار يجب أن يكون رقماً.".to_string(),
        Some("lat") | Some("lon") => "إحداثيات غير صحيحة.".to_string(),
        Some("role") => "نوع الحساب غير صالح.".to_string(),
        _ => "البيانات المدخلة غير صحيحة.".to_string(),
    }
}

/// Localized message for an error returned by the engine
pub fn user_message(err: &ExError) -> String {
    match err.kind() {
        ExErrorKind::DuplicateUsername => {
            "خطأ في إنشاء الحساب: اسم المستخدم مستخدم مسبقاً.".to_string()
        }
        ExErrorKind::NotFound if err.op() == Some("login") => LOGIN_FAILED.to_string(),
        ExErrorKind::NotFound if err.field() == Some("city") => "المدينة غير موجودة.".to_string(),
        ExErrorKind::NotFound => "العنصر المطلوب غير موجود.".to_string(),
        ExErrorKind::Validation => validation_message(err.field()),
        ExErrorKind::AreaNotAllowed => format!(
            "لدمشق: يمكنك فقط إضافة عقارات في المناطق التالية: {}",
            DAMASCUS_ACTIVE_AREAS.join(", ")
        ),
        ExErrorKind::Forbidden => "لا تملك صلاحية تنفيذ هذه العملية.".to_string(),
        ExErrorKind::Persistence | ExErrorKind::Io => {
            format!("حدث خطأ أثناء الحفظ: {}", err.message())
        }
        ExErrorKind::Internal => "حدث خطأ غير متوقع، حاول مرة أخرى.".to_string(),
    }
}

/// Notice to show instead of (or above) the listing cards
pub fn browse_message(outcome: &BrowseOutcome) -> Option<&'static str> {
    match outcome {
        BrowseOutcome::NoCity => Some(SELECT_CITY_FIRST),
        BrowseOutcome::NoArea { .. } => Some(SELECT_AREA),
        BrowseOutcome::AreaInactive { .. } => Some(AREA_CLOSED),
        BrowseOutcome::Listings { listings, .. } if listings.is_empty() => {
            Some(NO_LISTINGS_IN_AREA)
        }
        BrowseOutcome::Listings { .. } => None,
    }
}
