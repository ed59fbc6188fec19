//! Registro como mentor (partner).
//!
//! El step `Availability` es donde la pantalla host abre el selector de
//! agenda; el engine sólo conoce su contenido.

use mentor_core::flow_steps;

flow_steps! {
    pub enum PartnerRegistrationStep {
        Intro {
            main_title: "파트너로 활동해보세요",
            sub_title: "경험을 나누고 멘티를 만나보세요",
            action_label: "다음",
        },
        Career {
            main_title: "경력을 알려주세요",
            sub_title: "현재 직무와 연차를 입력해주세요",
            action_label: "다음",
        },
        Availability {
            main_title: "가능한 일정을 선택해주세요",
            sub_title: "최대 3개까지 선택할 수 있어요",
            action_label: "다음",
        },
        Review {
            main_title: "등록 정보를 확인해주세요",
            sub_title: "제출 후 심사가 진행돼요",
            action_label: "등록하기",
        },
    }
}
