//! Flujo de login por número de teléfono.

use mentor_core::flow_steps;

flow_steps! {
    pub enum LoginStep {
        Welcome {
            main_title: "멘토링을 시작해볼까요?",
            sub_title: "로그인하고 나에게 맞는 멘토를 만나보세요",
            action_label: "시작하기",
        },
        PhoneNumber {
            main_title: "휴대폰 번호를 입력해주세요",
            sub_title: "본인 확인을 위해서만 사용돼요",
            action_label: "인증번호 받기",
        },
        Verification {
            main_title: "인증번호를 입력해주세요",
            sub_title: "문자로 받은 6자리 번호를 입력해주세요",
            action_label: "확인",
        },
    }
}
